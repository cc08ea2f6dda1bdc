//! Call-site retry policy
//!
//! The generator never retries. Callers that want retries or a deadline wrap
//! the call here; the default policy is a single untimed attempt.

use crate::llm::adapters::LlmAdapter;
use crate::llm::generator::PromptGenerator;
use crate::llm::types::{GeneratedResult, GenerationError, GenerationFailure, PromptRequest};
use std::time::Duration;
use tracing::{error, warn};

/// Retry and timeout policy for one logical generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, at least 1
    pub max_attempts: u32,
    /// Delay before attempt `n + 1` is `base_delay * n`
    pub base_delay: Duration,
    /// Deadline per attempt
    pub attempt_timeout: Option<Duration>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 1,
            base_delay: Duration::from_millis(1000),
            attempt_timeout: None,
        }
    }
}

impl RetryPolicy {
    pub fn with_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.attempt_timeout = timeout;
        self
    }

    pub fn with_base_delay(mut self, delay: Duration) -> Self {
        self.base_delay = delay;
        self
    }
}

/// Run `generator.generate` under `policy`
///
/// Returns the first success or the last failure.
pub async fn generate_with_retry<A: LlmAdapter>(
    generator: &PromptGenerator<A>,
    request: &PromptRequest,
    policy: &RetryPolicy,
) -> Result<GeneratedResult, GenerationError> {
    let attempts = policy.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        let outcome = match policy.attempt_timeout {
            Some(limit) => match tokio::time::timeout(limit, generator.generate(request)).await {
                Ok(outcome) => outcome,
                Err(_) => Err(GenerationFailure::TimedOut(limit).into()),
            },
            None => generator.generate(request).await,
        };

        match outcome {
            Ok(result) => return Ok(result),
            Err(err) if attempt < attempts => {
                warn!(
                    attempt,
                    max_attempts = attempts,
                    cause = %err.cause(),
                    "generation attempt failed, retrying"
                );
                tokio::time::sleep(policy.base_delay * attempt).await;
                attempt += 1;
            }
            Err(err) => {
                error!(
                    attempt,
                    max_attempts = attempts,
                    cause = %err.cause(),
                    "generation failed"
                );
                return Err(err);
            }
        }
    }
}
