//! metaprompt: turns a short goal into a prompt optimized for a target AI
//! platform, using a hosted model with a structured JSON reply.

pub mod cli;
pub mod config;
pub mod llm;
pub mod platforms;
pub mod ui;

pub use llm::{GeneratedResult, PromptGenerator, PromptRequest, Tone};
pub use platforms::{PlatformConfig, TargetPlatform, PLATFORMS};
