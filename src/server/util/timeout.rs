use std::{future::Future, time::Duration};

use crate::server::error::{internal::InternalError, AppError};

/// Runs a storage future under a deadline
///
/// # Arguments
/// - `limit` - Maximum time the future may take
/// - `future` - The storage operation
///
/// # Returns
/// - `Ok(T)` - The operation completed in time
/// - `Err(AppError::InternalErr(StorageTimeout))` - The deadline elapsed; the future is dropped
/// - `Err(AppError)` - The operation itself failed
pub async fn with_timeout<T, E, F>(limit: Duration, future: F) -> Result<T, AppError>
where
    F: Future<Output = Result<T, E>>,
    E: Into<AppError>,
{
    match tokio::time::timeout(limit, future).await {
        Ok(result) => result.map_err(Into::into),
        Err(_) => Err(InternalError::StorageTimeout {
            timeout_ms: limit.as_millis(),
        }
        .into()),
    }
}
