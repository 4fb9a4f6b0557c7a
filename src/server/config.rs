use std::time::Duration;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_APP_URL: &str = "http://localhost:8080";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_STORAGE_TIMEOUT_MS: u64 = 5000;
const DEFAULT_INACTIVE_AFTER_DAYS: i64 = 30;

pub struct Config {
    pub database_url: String,

    /// Bot is not started when unset.
    pub discord_bot_token: Option<String>,

    pub app_url: String,
    pub bind_addr: String,

    /// Upper bound for each storage round trip made by the bump and verification paths.
    pub storage_timeout: Duration,

    /// Communities idle for longer than this many days are swept to inactive.
    pub inactive_after_days: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .ok()
                .filter(|token| !token.is_empty()),
            app_url: std::env::var("APP_URL").unwrap_or_else(|_| DEFAULT_APP_URL.to_string()),
            bind_addr: std::env::var("BIND_ADDR")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            storage_timeout: Duration::from_millis(parse_env_or(
                "STORAGE_TIMEOUT_MS",
                DEFAULT_STORAGE_TIMEOUT_MS,
            )?),
            inactive_after_days: parse_env_or("INACTIVE_AFTER_DAYS", DEFAULT_INACTIVE_AFTER_DAYS)?,
        })
    }
}

/// Reads and parses an optional environment variable, falling back to `default` when unset.
fn parse_env_or<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(value) => value
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
                reason: e.to_string(),
            }),
        Err(_) => Ok(default),
    }
}
