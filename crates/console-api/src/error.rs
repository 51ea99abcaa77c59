//! Error types for console API calls
//!
//! The three failure kinds a backend call can produce. Endpoint wrappers
//! return these unchanged; classification and user messaging happen in the
//! caller.

use thiserror::Error;

use crate::config::ConfigError;

/// Console API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connect, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Error body returned by the backend.
        message: String,
    },

    /// The response body did not match the expected shape.
    #[error("Invalid API response: {0}")]
    Decode(String),

    /// The request payload could not be serialized.
    #[error("Invalid request payload: {0}")]
    Encode(String),

    /// The client was built from an unusable configuration.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for console API calls.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// HTTP status code, if the backend answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            ApiError::Decode(_) | ApiError::Encode(_) | ApiError::Config(_) => None,
        }
    }

    /// Check if the backend rejected the caller's credentials.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_accessor() {
        let err = ApiError::Status {
            status: 401,
            message: "bad token".to_string(),
        };
        assert_eq!(err.status(), Some(401));
        assert!(err.is_unauthorized());

        let err = ApiError::Decode("expected array".to_string());
        assert_eq!(err.status(), None);
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_error_display() {
        let err = ApiError::Status {
            status: 503,
            message: "maintenance".to_string(),
        };
        assert_eq!(err.to_string(), "API error (503): maintenance");
    }
}
