//! Request and response DTOs shared by the HTTP API.
//!
//! Discord snowflakes travel as JSON strings and are parsed into `u64` at this boundary.

pub mod api;
pub mod bump;
pub mod community;

use serde::Deserialize;

fn serialize_u64_as_string<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&value.to_string())
}

fn deserialize_u64_from_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    String::deserialize(deserializer)?
        .trim()
        .parse::<u64>()
        .map_err(D::Error::custom)
}
