//! Shared transport client.
//!
//! Endpoint wrappers talk to the backend only through the [`Transport`]
//! trait. [`HttpTransport`] is the reqwest-backed implementation: it resolves
//! paths against the configured base URL, attaches the bearer token and maps
//! non-success statuses to [`ApiError::Status`].

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::config::ConsoleConfig;
use crate::error::{ApiError, ApiResult};

/// Transport capability used by the endpoint wrappers.
///
/// Implementations return the decoded JSON body of a successful response.
/// An empty body is returned as [`Value::Null`].
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a GET request to `path`.
    async fn get(&self, path: &str) -> ApiResult<Value>;

    /// Issue a POST request to `path` with a JSON body.
    async fn post(&self, path: &str, body: Value) -> ApiResult<Value>;
}

/// reqwest-backed transport.
#[derive(Clone)]
pub struct HttpTransport {
    /// HTTP client instance.
    client: Client,

    /// Base URL and credentials.
    config: ConsoleConfig,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.config.base_url)
            .field("has_auth", &self.config.has_auth())
            .finish()
    }
}

impl HttpTransport {
    /// Create a new transport from configuration.
    ///
    /// Fails with [`ApiError::Config`] if the configuration does not validate.
    pub fn new(config: ConsoleConfig) -> ApiResult<Self> {
        config.validate()?;
        let client = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self { client, config })
    }

    /// Replace the bearer token, e.g. after a successful login.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.config.api_token = Some(token.into());
        self
    }

    /// The configuration this transport was built from.
    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.config.api_token {
            Some(ref token) => request.header("Authorization", format!("Bearer {}", token)),
            None => request,
        }
    }

    /// Handle API response and parse JSON.
    async fn handle_response(&self, response: reqwest::Response) -> ApiResult<Value> {
        let status = response.status();

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!("Console API error ({}): {}", status.as_u16(), message);
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self))]
    async fn get(&self, path: &str) -> ApiResult<Value> {
        let url = self.config.url(path);
        debug!("GET {}", url);

        let response = self.authorize(self.client.get(&url)).send().await?;
        self.handle_response(response).await
    }

    #[instrument(skip(self, body))]
    async fn post(&self, path: &str, body: Value) -> ApiResult<Value> {
        let url = self.config.url(path);
        debug!("POST {}", url);

        let response = self.authorize(self.client.post(&url).json(&body)).send().await?;
        self.handle_response(response).await
    }
}

/// Serialize a request payload into a JSON value.
pub(crate) fn encode<P: Serialize + ?Sized>(payload: &P) -> ApiResult<Value> {
    serde_json::to_value(payload).map_err(|e| ApiError::Encode(e.to_string()))
}

/// Decode a response body into the expected shape.
pub(crate) fn decode<T: DeserializeOwned>(value: Value) -> ApiResult<T> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}
