//! Console configuration.
//!
//! Provides the single `baseUrl` every endpoint path is composed from, plus
//! the transport timeout and the mock-data switches used during development.
//! Configuration is loaded from environment variables with defaults suitable
//! for a local backend.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Missing required environment variable.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Invalid configuration value.
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue {
        /// Configuration key.
        key: String,
        /// Error message.
        message: String,
    },
}

/// Console client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Base URL all endpoint paths are appended to.
    pub base_url: String,

    /// Bearer token attached to every request, if signed in.
    pub api_token: Option<String>,

    /// Request timeout in seconds.
    pub timeout_secs: u64,

    /// Whether resource stores should read from the mock data source.
    pub use_mock_data: bool,

    /// Simulated latency of the mock data source in milliseconds.
    pub mock_latency_ms: u64,
}

impl Default for ConsoleConfig {
    /// Returns default configuration suitable for local development.
    fn default() -> Self {
        Self {
            base_url: "http://localhost:4000/api".to_string(),
            api_token: None,
            timeout_secs: 30,
            use_mock_data: true,
            mock_latency_ms: 500,
        }
    }
}

impl ConsoleConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CONSOLE_API_URL`: Backend base URL (default: http://localhost:4000/api)
    /// - `CONSOLE_API_TOKEN`: Bearer token for authenticated calls
    /// - `CONSOLE_TIMEOUT_SECS`: Request timeout in seconds (default: 30)
    /// - `CONSOLE_USE_MOCK_DATA`: Serve resource stores from mock data (default: true)
    /// - `CONSOLE_MOCK_LATENCY_MS`: Simulated mock latency (default: 500)
    pub fn from_env() -> Self {
        let default = Self::default();

        Self {
            base_url: std::env::var("CONSOLE_API_URL").unwrap_or(default.base_url),
            api_token: std::env::var("CONSOLE_API_TOKEN").ok(),
            timeout_secs: std::env::var("CONSOLE_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(default.timeout_secs),
            use_mock_data: std::env::var("CONSOLE_USE_MOCK_DATA")
                .map(|s| s != "false" && s != "0")
                .unwrap_or(default.use_mock_data),
            mock_latency_ms: std::env::var("CONSOLE_MOCK_LATENCY_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(default.mock_latency_ms),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Get the simulated mock latency as a Duration.
    pub fn mock_latency(&self) -> Duration {
        Duration::from_millis(self.mock_latency_ms)
    }

    /// Build a full URL by appending an endpoint path to the base URL.
    pub fn url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Check if bearer authentication is available.
    pub fn has_auth(&self) -> bool {
        self.api_token.is_some()
    }

    /// Validate the configuration.
    ///
    /// The base URL must be present and use http or https.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = self.base_url.trim();
        if base.is_empty() {
            return Err(ConfigError::MissingEnvVar("CONSOLE_API_URL".to_string()));
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                key: "CONSOLE_API_URL".to_string(),
                message: format!("expected an http(s) URL, got {}", base),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "CONSOLE_TIMEOUT_SECS".to_string(),
                message: "timeout must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
