//! Mode dispatch for non-interactive modes
//!
//! Each runner writes to the given sinks and returns an exit code, so the
//! binary only maps the code to `process::exit`.

use crate::cli::args::GenerateArgs;
use crate::cli::{EXIT_FAILURE, EXIT_INVALID_INPUT, EXIT_SUCCESS};
use crate::llm::{
    generate_with_retry, GeneratedResult, LlmAdapter, PromptGenerator, PromptRequest, RetryPolicy,
};
use crate::platforms::PLATFORMS;
use std::io::Write;
use std::time::Duration;

/// Build the request described by `generate` arguments
pub fn request_from_args(args: &GenerateArgs) -> PromptRequest {
    PromptRequest::new(args.goal_text(), args.platform, args.tone).with_context(!args.no_context)
}

/// Retry policy described by `generate` arguments
pub fn policy_from_args(args: &GenerateArgs) -> RetryPolicy {
    RetryPolicy::default()
        .with_attempts(args.attempts)
        .with_timeout(args.timeout_secs.map(Duration::from_secs))
}

/// Run `generate` mode
pub async fn run_generate<A, O, E>(
    generator: &PromptGenerator<A>,
    args: &GenerateArgs,
    out: &mut O,
    err: &mut E,
) -> i32
where
    A: LlmAdapter,
    O: Write,
    E: Write,
{
    let request = request_from_args(args);
    if let Err(e) = request.validate() {
        let _ = writeln!(err, "{}", e);
        return EXIT_INVALID_INPUT;
    }

    match generate_with_retry(generator, &request, &policy_from_args(args)).await {
        Ok(result) => match write_result(out, &result, args.json) {
            Ok(()) => EXIT_SUCCESS,
            Err(e) => {
                let _ = writeln!(err, "Error: {}", e);
                EXIT_FAILURE
            }
        },
        Err(e) => {
            let _ = writeln!(err, "{}", e);
            EXIT_FAILURE
        }
    }
}

fn write_result<O: Write>(out: &mut O, result: &GeneratedResult, json: bool) -> crate::cli::Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(result)?)?;
    } else {
        writeln!(out, "{}", result.markdown)?;
        writeln!(out)?;
        writeln!(out, "> {}", result.explanation)?;
    }
    Ok(())
}

/// Run `platforms` mode
pub fn run_platforms<O: Write>(out: &mut O, json: bool) -> crate::cli::Result<i32> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&PLATFORMS)?)?;
        return Ok(EXIT_SUCCESS);
    }

    for platform in PLATFORMS {
        writeln!(
            out,
            "{:<18} {:<18} {}  {}",
            platform.slug, platform.label, platform.color, platform.description
        )?;
    }
    Ok(EXIT_SUCCESS)
}
