//! Prompt generation
//!
//! - `contracts`: request composer (system instruction, user content, schema)
//! - `adapters`: provider adapter and HTTP transports
//! - `generator`: single-shot generation client
//! - `retry`: optional call-site retry/timeout wrapper

pub mod adapters;
pub mod contracts;
pub mod generator;
pub mod retry;
pub mod types;

pub use adapters::{create_adapter_from_config, AdapterError, GeminiAdapter, LlmAdapter};
pub use contracts::{compose, StructuredPrompt};
pub use generator::{parse_generated_result, PromptGenerator};
pub use retry::{generate_with_retry, RetryPolicy};
pub use types::{
    GeneratedResult, GenerationError, GenerationFailure, PromptRequest, Tone, ValidationError,
    EMPTY_GOAL_MESSAGE, GENERATION_FAILED_MESSAGE,
};
