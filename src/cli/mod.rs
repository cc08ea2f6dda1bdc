//! CLI module
//!
//! Provides:
//! - Argument parsing for CLI modes
//! - Mode dispatch (generate, platforms)
//! - Logging initialisation

pub mod args;
pub mod dispatch;
pub mod logging;

// Re-exports
pub use args::{parse_args, Args, GenerateArgs, Mode};
pub use dispatch::{run_generate, run_platforms};
pub use logging::{init_logging, LogTarget};

/// CLI errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("Adapter error: {0}")]
    Adapter(#[from] crate::llm::AdapterError),

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Exit codes (deterministic)
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_INVALID_INPUT: i32 = 2;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, Error>;
