//! Terminal form
//!
//! The UI holds no network code: `submit` hands back a request and the
//! event loop runs it off-thread, then reports the outcome via `complete`.

pub mod clipboard;
pub mod input;
pub mod state;
pub mod terminal;
pub mod view;

// Re-exports
pub use clipboard::copy_to_clipboard;
pub use input::{apply, map_key, Action};
pub use state::{App, Focus, SubmitOutcome};
pub use view::render;

/// UI result type
pub type Result<T> = std::result::Result<T, Error>;

/// UI errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
