//! Error types for data sources

use console_api::ApiError;
use thiserror::Error;

/// Data source error types.
///
/// Resource stores do not distinguish between these; they log the error and
/// surface a generic notification.
#[derive(Debug, Error)]
pub enum DataError {
    /// The backend call failed
    #[error("Backend request failed: {0}")]
    Api(#[from] ApiError),

    /// The data source is unavailable
    #[error("Data source unavailable: {0}")]
    Unavailable(String),
}

/// Result type for data source operations.
pub type DataResult<T> = Result<T, DataError>;
