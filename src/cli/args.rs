//! CLI argument parsing
//!
//! ```text
//! metaprompt [--config <file>] [tui]
//! metaprompt generate [-p <platform>] [-t <tone>] [--no-context] [--json]
//!                     [--attempts N] [--timeout-secs S] <goal...>
//! metaprompt platforms [--json]
//! ```

use crate::llm::Tone;
use crate::platforms::TargetPlatform;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parsed CLI arguments
#[derive(Debug, Clone, PartialEq, Parser)]
#[command(
    name = "metaprompt",
    version,
    about = "Turns a short goal into a prompt optimized for a target AI platform"
)]
pub struct Args {
    /// TOML config file (api_key, model, base_url, timeout_secs, log_dir)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Mode (default: interactive form)
    #[command(subcommand)]
    pub mode: Option<Mode>,
}

/// CLI modes
#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Mode {
    /// Interactive terminal form
    Tui,

    /// Generate one prompt and print it
    Generate(GenerateArgs),

    /// List target platforms
    Platforms {
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
}

/// Options for `generate`
#[derive(Debug, Clone, PartialEq, clap::Args)]
pub struct GenerateArgs {
    /// Target platform (slug or label)
    #[arg(short, long, default_value = "nano-banana")]
    pub platform: TargetPlatform,

    /// Tone: professional, creative, technical, concise
    #[arg(short, long, default_value = "professional")]
    pub tone: Tone,

    /// Disable the context helper flag
    #[arg(long)]
    pub no_context: bool,

    /// Output the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Total attempts (retries happen only when > 1)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub attempts: u32,

    /// Deadline per attempt, in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// What the prompt should achieve
    #[arg(required = true, num_args = 1..)]
    pub goal: Vec<String>,
}

impl GenerateArgs {
    /// Goal words joined with single spaces
    pub fn goal_text(&self) -> String {
        self.goal.join(" ")
    }
}

/// Parse CLI arguments from an iterator (program name first)
pub fn parse_args<I, T>(args: I) -> Result<Args, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Args::try_parse_from(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_args() {
        let parsed = parse_args(["metaprompt"]).unwrap();
        assert!(parsed.mode.is_none());
        assert!(parsed.config.is_none());
    }

    #[test]
    fn test_parse_tui_mode() {
        let parsed = parse_args(["metaprompt", "tui"]).unwrap();
        assert_eq!(parsed.mode, Some(Mode::Tui));
    }

    #[test]
    fn test_parse_generate_defaults() {
        let parsed = parse_args(["metaprompt", "generate", "um", "jogo", "da", "cobrinha"]).unwrap();
        match parsed.mode {
            Some(Mode::Generate(args)) => {
                assert_eq!(args.platform, TargetPlatform::NanoBanana);
                assert_eq!(args.tone, Tone::Professional);
                assert!(!args.no_context);
                assert!(!args.json);
                assert_eq!(args.attempts, 1);
                assert_eq!(args.timeout_secs, None);
                assert_eq!(args.goal_text(), "um jogo da cobrinha");
            }
            other => panic!("unexpected mode: {:?}", other),
        }
    }

    #[test]
    fn test_parse_generate_options() {
        let parsed = parse_args([
            "metaprompt",
            "--config",
            "/tmp/mp.toml",
            "generate",
            "-p",
            "lovable",
            "-t",
            "creative",
            "--no-context",
            "--json",
            "--attempts",
            "3",
            "--timeout-secs",
            "20",
            "um app de lista de tarefas",
        ])
        .unwrap();
        assert_eq!(parsed.config, Some(PathBuf::from("/tmp/mp.toml")));
        match parsed.mode {
            Some(Mode::Generate(args)) => {
                assert_eq!(args.platform, TargetPlatform::Lovable);
                assert_eq!(args.tone, Tone::Creative);
                assert!(args.no_context);
                assert!(args.json);
                assert_eq!(args.attempts, 3);
                assert_eq!(args.timeout_secs, Some(20));
                assert_eq!(args.goal_text(), "um app de lista de tarefas");
            }
            other => panic!("unexpected mode: {:?}", other),
        }
    }

    #[test]
    fn test_parse_generate_requires_goal() {
        assert!(parse_args(["metaprompt", "generate"]).is_err());
    }

    #[test]
    fn test_parse_unknown_platform() {
        assert!(parse_args(["metaprompt", "generate", "-p", "midjourney", "x"]).is_err());
    }

    #[test]
    fn test_parse_zero_attempts_rejected() {
        assert!(parse_args(["metaprompt", "generate", "--attempts", "0", "x"]).is_err());
    }

    #[test]
    fn test_parse_platforms_json() {
        let parsed = parse_args(["metaprompt", "platforms", "--json"]).unwrap();
        assert_eq!(parsed.mode, Some(Mode::Platforms { json: true }));
    }

    #[test]
    fn test_parse_unknown_mode() {
        assert!(parse_args(["metaprompt", "unknown_mode"]).is_err());
    }
}
