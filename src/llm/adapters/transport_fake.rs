//! Fake transport for testing
//!
//! Uses fixture strings instead of real HTTP calls and records what was sent.

use crate::llm::adapters::transport_types::{error_for_status, AdapterError, HttpTransport};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Request captured by `FakeTransport`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedRequest {
    /// Header value by case-insensitive name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Fake transport for testing (uses fixture strings)
#[derive(Debug, Default)]
pub struct FakeTransport {
    /// Response body to return
    pub response_body: String,
    /// Network error message to return (if set)
    pub error_message: Option<String>,
    /// Non-2xx status to return with `response_body` (if set)
    pub status: Option<u16>,
    calls: AtomicUsize,
    last_request: Mutex<Option<RecordedRequest>>,
}

impl FakeTransport {
    /// Create fake transport with given response
    pub fn new(response: &str) -> Self {
        Self {
            response_body: response.to_string(),
            ..Self::default()
        }
    }

    /// Create fake transport that returns a network error
    pub fn with_error(msg: &str) -> Self {
        Self {
            error_message: Some(msg.to_string()),
            ..Self::default()
        }
    }

    /// Create fake transport that answers with an HTTP error status
    pub fn with_status(status: u16, body: &str) -> Self {
        Self {
            response_body: body.to_string(),
            status: Some(status),
            ..Self::default()
        }
    }

    /// Number of `post_json` calls so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Most recent request, if any
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.last_request
            .lock()
            .map(|guard| (*guard).clone())
            .unwrap_or_else(|poisoned| (*poisoned.into_inner()).clone())
    }
}

#[async_trait]
impl HttpTransport for FakeTransport {
    async fn post_json(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &str,
    ) -> Result<String, AdapterError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let recorded = RecordedRequest {
            url: url.to_string(),
            headers: headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            body: body.to_string(),
        };
        match self.last_request.lock() {
            Ok(mut guard) => *guard = Some(recorded),
            Err(poisoned) => *poisoned.into_inner() = Some(recorded),
        }

        if let Some(ref msg) = self.error_message {
            return Err(AdapterError::Network(msg.clone()));
        }
        if let Some(status) = self.status {
            return Err(error_for_status(status, &self.response_body, None));
        }
        Ok(self.response_body.clone())
    }
}
