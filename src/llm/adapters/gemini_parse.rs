//! Gemini response parsing
//!
//! Public functions for parsing `generateContent` replies.

use crate::llm::adapters::AdapterError;
use serde::Deserialize;

/// Top-level `generateContent` response envelope
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
    #[serde(default)]
    error: Option<ErrorBody>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: Option<i64>,
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
}

/// Extract the reply text from a `generateContent` JSON body
///
/// The text is the concatenation of every text part of the first candidate.
/// Returns `Ok("")` when the candidate carries no text; callers decide what
/// an empty reply means.
pub fn parse_generate_content(response: &str) -> Result<String, AdapterError> {
    let parsed: GenerateContentResponse = serde_json::from_str(response)?;

    if let Some(err) = parsed.error {
        let code = err
            .status
            .or_else(|| err.code.map(|c| c.to_string()))
            .unwrap_or_else(|| "UNKNOWN".to_string());
        return Err(AdapterError::Provider {
            code,
            message: err.message,
        });
    }

    if let Some(reason) = parsed.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(AdapterError::Provider {
            code: "BLOCKED".to_string(),
            message: format!("Prompt blocked: {}", reason),
        });
    }

    let candidate = parsed.candidates.into_iter().next().ok_or_else(|| {
        AdapterError::InvalidResponse("Missing candidates[0]".to_string())
    })?;

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.is_empty() {
        if let Some(reason) = candidate.finish_reason {
            if reason != "STOP" {
                return Err(AdapterError::InvalidResponse(format!(
                    "Empty candidate (finishReason={})",
                    reason
                )));
            }
        }
    }

    Ok(text)
}
