//! metaprompt: interactive prompt optimizer
//!
//! Modes:
//! - (none) / `tui`: terminal form, one generation at a time
//! - `generate`: one-shot generation to stdout
//! - `platforms`: list target platforms

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use crossterm::event::{poll, read, Event};
use tokio::sync::mpsc;
use tracing::{info, warn};

use metaprompt::cli::{self, init_logging, parse_args, LogTarget, Mode};
use metaprompt::config::Config;
use metaprompt::llm::{
    create_adapter_from_config, GeneratedResult, GenerationError, PromptGenerator,
};
use metaprompt::ui::terminal::CrosstermTerminal;
use metaprompt::ui::{self, Action, App, SubmitOutcome};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    dotenvy::dotenv().ok();

    let args = match parse_args(std::env::args_os()) {
        Ok(args) => args,
        Err(e) => e.exit(),
    };

    let mode = args.mode.clone().unwrap_or(Mode::Tui);

    if let Mode::Platforms { json } = mode {
        let code = cli::run_platforms(&mut io::stdout(), json)?;
        std::process::exit(code);
    }

    let config = Config::load(args.config.as_deref()).context("loading configuration")?;

    let target = match mode {
        Mode::Tui => LogTarget::file_in(config.log_dir.clone()),
        _ => LogTarget::Stderr,
    };
    let _guard = init_logging(target)?;

    let adapter = create_adapter_from_config(&config)?;
    let generator = Arc::new(PromptGenerator::new(adapter));

    match mode {
        Mode::Generate(generate) => {
            let code =
                cli::run_generate(&*generator, &generate, &mut io::stdout(), &mut io::stderr()).await;
            std::process::exit(code);
        }
        _ => {
            run_tui(generator)?;
            Ok(())
        }
    }
}

type Outcome = Result<GeneratedResult, GenerationError>;

/// Run the interactive form until the user quits
fn run_tui(generator: Arc<PromptGenerator>) -> ui::Result<()> {
    let mut terminal = ui::terminal::enter()?;

    let result = event_loop(&mut terminal, generator);

    // Restore the terminal even if the loop failed
    ui::terminal::leave(&mut terminal)?;

    result
}

fn event_loop(
    terminal: &mut CrosstermTerminal,
    generator: Arc<PromptGenerator>,
) -> ui::Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Outcome>();
    let mut app = App::new();
    info!("form started");

    while !app.should_quit() {
        ui::render(terminal, &app)?;

        // Block for input (100ms timeout)
        if poll(Duration::from_millis(100))? {
            if let Event::Key(key) = read()? {
                if let Some(action) = ui::map_key(key) {
                    if action == Action::Copy {
                        if let Some(text) = app.copy_text() {
                            ui::copy_to_clipboard(terminal.backend_mut(), text)?;
                            app.mark_copied();
                        }
                    }
                    if let Some(SubmitOutcome::Dispatched(request)) = ui::apply(&mut app, action) {
                        let generator = Arc::clone(&generator);
                        let tx = tx.clone();
                        tokio::spawn(async move {
                            let outcome = generator.generate(&request).await;
                            if tx.send(outcome).is_err() {
                                warn!("form closed before generation finished");
                            }
                        });
                    }
                }
            }
        }

        // Outcomes from spawned generations
        while let Ok(outcome) = rx.try_recv() {
            app.complete(outcome);
        }
    }

    info!("form closed");
    Ok(())
}
