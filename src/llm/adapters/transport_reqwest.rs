//! Real HTTP transport using reqwest

use crate::llm::adapters::transport_types::{error_for_status, AdapterError, HttpTransport};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Real HTTP transport using reqwest
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Transport with the client's default (unbounded) timeout
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Transport with a per-request timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self, AdapterError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AdapterError::Configuration(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post_json(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &str,
    ) -> Result<String, AdapterError> {
        debug!(url, body_len = body.len(), "POST");

        let mut request = self.client.post(url).body(body.to_string());
        for (key, value) in headers {
            request = request.header(*key, *value);
        }

        let response = request.send().await?;
        let status = response.status();
        let retry_after = response
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let text = response.text().await?;
        debug!(status = status.as_u16(), body_len = text.len(), "response");

        if !status.is_success() {
            return Err(error_for_status(
                status.as_u16(),
                &text,
                retry_after.as_deref(),
            ));
        }

        Ok(text)
    }
}
