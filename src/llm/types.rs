//! Request and result types for prompt generation
//!
//! `PromptRequest` is built once per submit and never mutated afterwards.
//! `GeneratedResult` is exactly what the model returned, field for field.

use crate::llm::adapters::AdapterError;
use crate::platforms::TargetPlatform;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User-facing message for an empty goal
pub const EMPTY_GOAL_MESSAGE: &str = "Por favor, descreva o que você quer que o prompt faça.";

/// User-facing message for every generation failure
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate prompt. Please try again.";

/// Stylistic modifier for the generated prompt
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tone {
    #[default]
    Professional,
    Creative,
    Technical,
    Concise,
}

impl Tone {
    pub const ALL: [Tone; 4] = [
        Tone::Professional,
        Tone::Creative,
        Tone::Technical,
        Tone::Concise,
    ];

    /// Name sent to the model
    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Creative => "Creative",
            Tone::Technical => "Technical",
            Tone::Concise => "Concise",
        }
    }

    /// Name shown in the form
    pub fn display_label(self) -> &'static str {
        match self {
            Tone::Professional => "Profissional",
            Tone::Creative => "Criativo",
            Tone::Technical => "Técnico",
            Tone::Concise => "Conciso",
        }
    }

    pub fn next(self) -> Tone {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Tone {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown tone name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown tone '{0}' (expected one of: professional, creative, technical, concise)")]
pub struct UnknownTone(pub String);

impl FromStr for Tone {
    type Err = UnknownTone;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Tone::ALL
            .into_iter()
            .find(|t| {
                t.as_str().eq_ignore_ascii_case(wanted)
                    || t.display_label().to_lowercase() == wanted.to_lowercase()
            })
            .ok_or_else(|| UnknownTone(s.to_string()))
    }
}

/// One generation attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptRequest {
    pub user_goal: String,
    pub target_platform: TargetPlatform,
    pub include_context: bool,
    pub tone: Tone,
}

impl PromptRequest {
    /// Request with the context helper enabled
    pub fn new(user_goal: impl Into<String>, target_platform: TargetPlatform, tone: Tone) -> Self {
        Self {
            user_goal: user_goal.into(),
            target_platform,
            include_context: true,
            tone,
        }
    }

    pub fn with_context(mut self, include_context: bool) -> Self {
        self.include_context = include_context;
        self
    }

    /// Reject goals that are empty after trimming
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.user_goal.trim().is_empty() {
            return Err(ValidationError::EmptyGoal);
        }
        Ok(())
    }
}

/// Structured reply from the model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedResult {
    pub markdown: String,
    pub explanation: String,
}

/// Rejected before any outbound call
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{}", EMPTY_GOAL_MESSAGE)]
    EmptyGoal,
}

/// Underlying cause of a generation failure (diagnostics only)
#[derive(Debug, thiserror::Error)]
pub enum GenerationFailure {
    #[error(transparent)]
    Adapter(#[from] AdapterError),

    #[error("No response received from the model")]
    EmptyReply,

    #[error("Reply is not a valid result object: {0}")]
    MalformedReply(#[from] serde_json::Error),

    #[error("Attempt timed out after {0:?}")]
    TimedOut(std::time::Duration),
}

/// Generation failed; the message never reveals the cause
#[derive(Debug, thiserror::Error)]
#[error("Failed to generate prompt. Please try again.")]
pub struct GenerationError {
    #[source]
    cause: GenerationFailure,
}

impl GenerationError {
    pub fn cause(&self) -> &GenerationFailure {
        &self.cause
    }

    pub fn into_cause(self) -> GenerationFailure {
        self.cause
    }
}

impl From<GenerationFailure> for GenerationError {
    fn from(cause: GenerationFailure) -> Self {
        Self { cause }
    }
}

impl From<AdapterError> for GenerationError {
    fn from(err: AdapterError) -> Self {
        GenerationFailure::Adapter(err).into()
    }
}
