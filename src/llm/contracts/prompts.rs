//! System instruction and user content
//!
//! The system instruction is static: it never looks at the request. The
//! knowledge base is rendered from the platform table, so every platform is
//! always present.

use crate::llm::types::PromptRequest;
use crate::platforms::PLATFORMS;

const PERSONA: &str = r#"You are "MetaPrompt", an elite Prompt Engineer.
YOUR GOAL: Transform the user's request into a HYPER-SPECIFIC, EXTREMELY DETAILED prompt optimized for the target AI."#;

const EXPANSION_RULE: &str = r#"CRITICAL RULE: NEVER be vague.
You must INFER and EXPAND details.
- If the user asks for "a snake game", your generated prompt must specify: "Python with Pygame, 600x400 resolution, green snake, red apple, score display, game over screen, restart mechanic, and arrow key controls".
- If the user asks for "a marketing email", specify: "AIDA framework, catchy subject line, professional yet urgent tone, clear CTA, under 200 words"."#;

const IMAGE_RULE: &str = r#"IMAGE GENERATION RULE:
If the user's goal is to create an image (photo, illustration, logo, poster, scene), the 'markdown' field MUST be the image prompt itself: a direct visual description of the final picture (subject, setting, composition, lighting, camera/lens, art style, color palette, mood).
Do NOT write meta-instructions such as "Create a prompt that..." or "You are an image generator"."#;

const OUTPUT_FORMAT: &str = r#"OUTPUT FORMAT:
Return a JSON object:
- 'markdown': The detailed prompt text. **It MUST be in the same language as the User's Goal (mostly Portuguese).**
- 'explanation': A brief 1-sentence tip **IN PORTUGUESE** explaining why this level of detail helps the chosen platform."#;

/// Call to action closing the user content
pub const CALL_TO_ACTION: &str = "Generate the optimized, hyper-specific prompt now.";

/// The fixed system instruction
pub fn system_instruction() -> String {
    let mut out = String::new();
    out.push_str(PERSONA);
    out.push_str("\n\n");
    out.push_str(EXPANSION_RULE);
    out.push_str("\n\n");
    out.push_str(IMAGE_RULE);
    out.push_str("\n\nKNOWLEDGE BASE (Target Platforms):\n");
    for (idx, platform) in PLATFORMS.iter().enumerate() {
        out.push_str(&platform.instruction_block(idx + 1));
        out.push('\n');
    }
    out.push_str(OUTPUT_FORMAT);
    out.push('\n');
    out
}

/// User content for one request
///
/// Embeds the four request fields verbatim.
pub fn build_user_content(request: &PromptRequest) -> String {
    format!(
        "User Goal: \"{}\"\nTarget Platform: {}\nDesired Tone: {}\nInclude Context Helper: {}\n\n{}",
        request.user_goal,
        request.target_platform.label(),
        request.tone.as_str(),
        request.include_context,
        CALL_TO_ACTION
    )
}
