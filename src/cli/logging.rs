//! Tracing subscriber setup
//!
//! The TUI owns the terminal, so in TUI mode events go to a log file through
//! a non-blocking appender. One-shot modes log to stderr.

use crate::cli::{Error, Result};
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Filter variable; falls back to `info`
pub const ENV_LOG: &str = "METAPROMPT_LOG";

/// Log file name inside the log directory
pub const LOG_FILE_NAME: &str = "metaprompt.log";

/// Where log events are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// Append to `<dir>/metaprompt.log`
    File(PathBuf),
}

impl LogTarget {
    /// File target in `dir`, or the system temp dir
    pub fn file_in(dir: Option<PathBuf>) -> Self {
        LogTarget::File(dir.unwrap_or_else(std::env::temp_dir))
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber
///
/// Keep the returned guard alive until exit so buffered file events flush.
pub fn init_logging(target: LogTarget) -> Result<Option<WorkerGuard>> {
    match target {
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(std::io::stderr)
                .with_target(false)
                .try_init()
                .map_err(|e| Error::Logging(e.to_string()))?;
            Ok(None)
        }
        LogTarget::File(dir) => {
            std::fs::create_dir_all(&dir)?;
            let appender = tracing_appender::rolling::never(&dir, LOG_FILE_NAME);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(writer)
                .with_ansi(false)
                .try_init()
                .map_err(|e| Error::Logging(e.to_string()))?;
            Ok(Some(guard))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_in_defaults_to_temp_dir() {
        assert_eq!(LogTarget::file_in(None), LogTarget::File(std::env::temp_dir()));
        assert_eq!(
            LogTarget::file_in(Some(PathBuf::from("/var/log/mp"))),
            LogTarget::File(PathBuf::from("/var/log/mp"))
        );
    }
}
