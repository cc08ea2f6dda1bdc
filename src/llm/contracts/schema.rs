//! Structured-output schema for the reply
//!
//! Uses the Gemini schema dialect (upper-case type names).

use serde_json::{json, Value as JsonValue};

/// Fields the reply object must carry
pub const REQUIRED_FIELDS: [&str; 2] = ["markdown", "explanation"];

/// Response schema: object with required string fields `markdown` and `explanation`
pub fn response_schema() -> JsonValue {
    json!({
        "type": "OBJECT",
        "properties": {
            "markdown": {
                "type": "STRING",
                "description": "The highly optimized, extremely specific prompt text formatted in Markdown."
            },
            "explanation": {
                "type": "STRING",
                "description": "A short explanation of the optimization strategy in Portuguese."
            }
        },
        "required": REQUIRED_FIELDS
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_shape() {
        let schema = response_schema();
        assert_eq!(schema["type"], "OBJECT");
        assert_eq!(schema["properties"]["markdown"]["type"], "STRING");
        assert_eq!(schema["properties"]["explanation"]["type"], "STRING");
        assert_eq!(schema["required"], json!(["markdown", "explanation"]));
    }
}
