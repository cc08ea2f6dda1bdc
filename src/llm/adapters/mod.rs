//! LLM Adapters
//!
//! Provider interface for the structured generation call.
//! Gemini is the only provider; tests swap the transport, not the adapter.

pub mod factory;
pub mod gemini;
pub mod gemini_parse;
pub mod transport;
pub mod transport_fake;
pub mod transport_reqwest;
pub mod transport_types;

// Re-export common types
pub use factory::create_adapter_from_config;
pub use gemini::GeminiAdapter;
pub use transport::{FakeTransport, Transport};
pub use transport_types::{AdapterError, HttpTransport};

use crate::llm::contracts::StructuredPrompt;
use async_trait::async_trait;

/// LLM adapter trait
///
/// One structured, non-streaming call per invocation. Returns the raw reply
/// text (expected to be JSON); interpreting it is the caller's job.
#[async_trait]
pub trait LlmAdapter: Send + Sync {
    /// Issue one generation call and return the reply text
    async fn generate_structured(&self, prompt: &StructuredPrompt) -> Result<String, AdapterError>;

    /// Provider name for logging
    fn provider_name(&self) -> &str;

    /// Model identifier for logging
    fn model(&self) -> &str;
}
