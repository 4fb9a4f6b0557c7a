use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase or its storage indicating unexpected behavior
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// Stored tag column does not hold a JSON array of strings
    #[error("Failed to decode stored tags '{value}': {source}")]
    MalformedTags {
        /// The stored column value
        value: String,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// A storage call did not complete within the configured timeout
    #[error("Storage operation timed out after {timeout_ms}ms")]
    StorageTimeout {
        /// The timeout that elapsed, in milliseconds
        timeout_ms: u128,
    },

    /// A bump kept losing the conditional write without a cooldown explaining it
    #[error("Bump for community {external_id} lost {attempts} consecutive write races")]
    BumpContention {
        /// Discord guild ID of the community
        external_id: u64,
        /// Number of attempts made
        attempts: u32,
    },
}
