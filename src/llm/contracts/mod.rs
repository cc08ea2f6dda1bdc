//! Request composer
//!
//! Turns a `PromptRequest` into the fixed system instruction, the templated
//! user content, and the declared response schema.

mod prompts;
mod schema;

pub use prompts::{build_user_content, system_instruction, CALL_TO_ACTION};
pub use schema::{response_schema, REQUIRED_FIELDS};

use crate::llm::types::PromptRequest;
use serde_json::Value as JsonValue;

/// Sampling temperature for every generation
pub const TEMPERATURE: f64 = 0.7;

/// MIME type requested for the reply
pub const RESPONSE_MIME_TYPE: &str = "application/json";

/// Everything the adapter needs for one structured call
#[derive(Debug, Clone, PartialEq)]
pub struct StructuredPrompt {
    pub system_instruction: String,
    pub user_content: String,
    pub response_schema: JsonValue,
    pub temperature: f64,
}

/// Compose the outbound call for a request
pub fn compose(request: &PromptRequest) -> StructuredPrompt {
    StructuredPrompt {
        system_instruction: system_instruction(),
        user_content: build_user_content(request),
        response_schema: response_schema(),
        temperature: TEMPERATURE,
    }
}
