//! Transport types
//!
//! Common types shared across transport implementations.

use async_trait::async_trait;

/// Adapter errors
#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    /// Network error (connection refused, timeout, etc.)
    #[error("Network error: {0}")]
    Network(String),

    /// HTTP error (non-2xx status)
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Rate limited
    #[error("Rate limited{retry_after}")]
    RateLimited { retry_after: String },

    /// Invalid response from provider
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Provider-specific error (see response body)
    #[error("Provider error: {code} - {message}")]
    Provider { code: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<serde_json::Error> for AdapterError {
    fn from(err: serde_json::Error) -> Self {
        AdapterError::Json(err.to_string())
    }
}

impl From<reqwest::Error> for AdapterError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AdapterError::Network(format!("request timed out: {}", err))
        } else if let Some(status) = err.status() {
            AdapterError::Http {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            AdapterError::Network(err.to_string())
        }
    }
}

/// Map a non-2xx status and its body to an adapter error
pub fn error_for_status(status: u16, body: &str, retry_after: Option<&str>) -> AdapterError {
    match status {
        401 | 403 => AdapterError::Authentication(format!("HTTP {}: {}", status, body.trim())),
        429 => AdapterError::RateLimited {
            retry_after: retry_after
                .map(|s| format!(" (retry after {}s)", s))
                .unwrap_or_default(),
        },
        _ => AdapterError::Http {
            status,
            message: body.trim().to_string(),
        },
    }
}

/// HTTP transport
///
/// Abstraction over the HTTP client so adapters can be exercised with
/// `FakeTransport`.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// POST JSON request and return the response body
    ///
    /// Non-2xx statuses are errors.
    async fn post_json(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &str,
    ) -> Result<String, AdapterError>;
}
