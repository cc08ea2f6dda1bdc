//! Terminal setup and teardown
//!
//! Raw mode is entered first; any later setup failure must restore it before
//! the error reaches the caller.

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

pub type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Run `setup`; on failure run `restore` and return the setup error
pub fn setup_or_restore<T, S, R>(setup: S, restore: R) -> io::Result<T>
where
    S: FnOnce() -> io::Result<T>,
    R: FnOnce(),
{
    match setup() {
        Ok(value) => Ok(value),
        Err(e) => {
            restore();
            Err(e)
        }
    }
}

/// Enter raw mode and the alternate screen
pub fn enter() -> io::Result<CrosstermTerminal> {
    enable_raw_mode()?;
    setup_or_restore(
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            Terminal::new(CrosstermBackend::new(stdout))
        },
        || {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
        },
    )
}

/// Leave the alternate screen and raw mode
pub fn leave(terminal: &mut CrosstermTerminal) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}
