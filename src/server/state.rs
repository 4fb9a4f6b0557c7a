//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned for each request through
//! Axum's state extraction. The Discord bot holds its own clone.

use std::time::Duration;

use sea_orm::DatabaseConnection;

/// Application state containing shared resources and settings.
///
/// All fields are cheap to clone: `DatabaseConnection` is a pool handle whose clones
/// share the underlying connections.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for the registry and bump ledger.
    pub db: DatabaseConnection,

    /// Deadline applied to storage interactions on the bump, cooldown and verify paths.
    pub storage_timeout: Duration,

    /// Public website URL, linked from bot replies.
    pub app_url: String,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `storage_timeout` - Deadline for storage calls on the bump paths
    /// - `app_url` - Public website URL
    pub fn new(db: DatabaseConnection, storage_timeout: Duration, app_url: String) -> Self {
        Self {
            db,
            storage_timeout,
            app_url,
        }
    }
}
