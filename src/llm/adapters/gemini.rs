//! Gemini Adapter
//!
//! `generateContent` over the Generative Language REST API with a declared
//! response schema.

use crate::llm::adapters::transport::{HttpTransport, Transport};
use crate::llm::adapters::{AdapterError, LlmAdapter};
use crate::llm::contracts::{StructuredPrompt, RESPONSE_MIME_TYPE};
use async_trait::async_trait;

// Public parsing module (re-exported for testing)
pub use crate::llm::adapters::gemini_parse::parse_generate_content;

/// Default REST base URL
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model
pub const DEFAULT_MODEL: &str = "gemini-3-pro-preview";

/// Gemini adapter
#[derive(Debug)]
pub struct GeminiAdapter {
    /// Base URL (e.g., https://generativelanguage.googleapis.com/v1beta)
    base_url: String,
    /// Model name (e.g., gemini-3-pro-preview)
    model: String,
    /// API key
    api_key: String,
    /// HTTP transport
    transport: Transport,
}

impl GeminiAdapter {
    /// Create new Gemini adapter
    pub fn new(base_url: String, model: String, api_key: String) -> Self {
        Self::with_transport(base_url, model, api_key, Transport::default())
    }

    /// Create adapter with custom transport (for testing)
    pub fn with_transport(
        base_url: String,
        model: String,
        api_key: String,
        transport: Transport,
    ) -> Self {
        Self {
            base_url,
            model,
            api_key,
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// `generateContent` endpoint for the configured model
    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }

    /// Build `generateContent` request body
    pub fn build_request(&self, prompt: &StructuredPrompt) -> Result<String, AdapterError> {
        let request = serde_json::json!({
            "systemInstruction": {
                "parts": [{"text": prompt.system_instruction}]
            },
            "contents": [
                {"role": "user", "parts": [{"text": prompt.user_content}]}
            ],
            "generationConfig": {
                "responseMimeType": RESPONSE_MIME_TYPE,
                "responseSchema": prompt.response_schema,
                "temperature": prompt.temperature
            }
        });

        Ok(serde_json::to_string(&request)?)
    }
}

#[async_trait]
impl LlmAdapter for GeminiAdapter {
    async fn generate_structured(&self, prompt: &StructuredPrompt) -> Result<String, AdapterError> {
        let url = self.endpoint();
        let body = self.build_request(prompt)?;

        let headers = [
            ("x-goog-api-key", self.api_key.as_str()),
            ("Content-Type", "application/json"),
        ];

        let response = self.transport.post_json(&url, &headers, &body).await?;
        parse_generate_content(&response)
    }

    fn provider_name(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }
}
