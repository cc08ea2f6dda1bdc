//! Generation client
//!
//! One request, one outbound call, one parsed result. Every failure reaches
//! the caller as the same `GenerationError`; the cause is logged here.

use crate::llm::adapters::{GeminiAdapter, LlmAdapter};
use crate::llm::contracts::compose;
use crate::llm::types::{GeneratedResult, GenerationError, GenerationFailure, PromptRequest};
use std::time::Instant;
use tracing::{debug, error, info};
use uuid::Uuid;

/// Single-shot prompt generator over an adapter
///
/// Stateless between calls; safe to share behind an `Arc` and call
/// concurrently.
#[derive(Debug)]
pub struct PromptGenerator<A: LlmAdapter = GeminiAdapter> {
    adapter: A,
}

impl<A: LlmAdapter> PromptGenerator<A> {
    pub fn new(adapter: A) -> Self {
        Self { adapter }
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Generate an optimized prompt for `request`
    ///
    /// Does not validate the goal; callers reject empty goals before calling.
    pub async fn generate(&self, request: &PromptRequest) -> Result<GeneratedResult, GenerationError> {
        let request_id = Uuid::new_v4();
        let started = Instant::now();
        info!(
            %request_id,
            provider = self.adapter.provider_name(),
            model = self.adapter.model(),
            platform = request.target_platform.slug(),
            tone = request.tone.as_str(),
            "generating prompt"
        );

        let prompt = compose(request);
        debug!(
            %request_id,
            system_len = prompt.system_instruction.len(),
            user_len = prompt.user_content.len(),
            "composed request"
        );

        let outcome = match self.adapter.generate_structured(&prompt).await {
            Ok(text) => parse_generated_result(&text),
            Err(err) => Err(GenerationFailure::Adapter(err)),
        };

        match outcome {
            Ok(result) => {
                info!(
                    %request_id,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    markdown_len = result.markdown.len(),
                    "prompt generated"
                );
                Ok(result)
            }
            Err(cause) => {
                error!(
                    %request_id,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    error = %cause,
                    "Error generating prompt"
                );
                Err(cause.into())
            }
        }
    }
}

/// Parse the model's reply text into a result
///
/// The fields are returned exactly as sent: no trimming, no emptiness checks.
pub fn parse_generated_result(text: &str) -> Result<GeneratedResult, GenerationFailure> {
    if text.is_empty() {
        return Err(GenerationFailure::EmptyReply);
    }
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exact_fields() {
        let text = r#"{"markdown":"  # Título\n\n- item  ","explanation":"Detalhes ajudam."}"#;
        let result = parse_generated_result(text).unwrap();
        assert_eq!(result.markdown, "  # Título\n\n- item  ");
        assert_eq!(result.explanation, "Detalhes ajudam.");
    }

    #[test]
    fn test_parse_empty_reply() {
        assert!(matches!(
            parse_generated_result(""),
            Err(GenerationFailure::EmptyReply)
        ));
    }

    #[test]
    fn test_parse_missing_field() {
        assert!(matches!(
            parse_generated_result(r#"{"markdown":"x"}"#),
            Err(GenerationFailure::MalformedReply(_))
        ));
    }

    #[test]
    fn test_parse_wrong_type() {
        assert!(matches!(
            parse_generated_result(r#"{"markdown":1,"explanation":"y"}"#),
            Err(GenerationFailure::MalformedReply(_))
        ));
    }

    #[test]
    fn test_parse_not_json() {
        assert!(parse_generated_result("Here is your prompt: ...").is_err());
    }
}
