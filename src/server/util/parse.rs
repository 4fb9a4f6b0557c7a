use crate::server::error::{internal::InternalError, AppError};

/// Parses a u64 value from String
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::InternalErr(ParseStringId))` - Stored Discord ID is not a valid u64
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    match value.parse::<u64>() {
        Ok(id) => Ok(id),
        Err(source) => Err(InternalError::ParseStringId { value, source }.into()),
    }
}
