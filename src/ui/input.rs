//! Key mapping
//!
//! Translates terminal key events into form actions. Quit works from any
//! state; everything else is routed by focus.

use crate::ui::state::{App, SubmitOutcome};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Form action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Submit,
    Char(char),
    Backspace,
    NextFocus,
    SelectNext,
    SelectPrev,
    ClearError,
    /// Handled by the event loop, which owns the terminal
    Copy,
}

/// Map a key event to an action
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') | KeyCode::Char('q') if ctrl => Some(Action::Quit),
        KeyCode::Char('y') if ctrl => Some(Action::Copy),
        KeyCode::Char(_) if ctrl => None,
        KeyCode::Char(c) => Some(Action::Char(c)),
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Tab => Some(Action::NextFocus),
        KeyCode::Down => Some(Action::SelectNext),
        KeyCode::Up => Some(Action::SelectPrev),
        KeyCode::Esc => Some(Action::ClearError),
        _ => None,
    }
}

/// Apply an action; returns the request to run, if one was dispatched
pub fn apply(app: &mut App, action: Action) -> Option<SubmitOutcome> {
    match action {
        Action::Quit => app.quit(),
        Action::Submit => return Some(app.submit()),
        Action::Char(c) => app.input_char(c),
        Action::Backspace => app.backspace(),
        Action::NextFocus => app.cycle_focus(),
        Action::SelectNext => app.select_next(),
        Action::SelectPrev => app.select_prev(),
        Action::ClearError => app.clear_error(),
        Action::Copy => {}
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_ctrl_c_and_ctrl_q_quit() {
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_ctrl_y_copies() {
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('y'), KeyModifiers::CONTROL)),
            Some(Action::Copy)
        );
    }

    #[test]
    fn test_plain_q_is_text() {
        assert_eq!(map_key(key(KeyCode::Char('q'))), Some(Action::Char('q')));
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(map_key(key(KeyCode::Enter)), Some(Action::Submit));
        assert_eq!(map_key(key(KeyCode::Tab)), Some(Action::NextFocus));
        assert_eq!(map_key(key(KeyCode::Up)), Some(Action::SelectPrev));
        assert_eq!(map_key(key(KeyCode::Down)), Some(Action::SelectNext));
        assert_eq!(map_key(key(KeyCode::Esc)), Some(Action::ClearError));
        assert_eq!(map_key(key(KeyCode::F(1))), None);
    }

    #[test]
    fn test_apply_submit_returns_outcome() {
        let mut app = App::new();
        for c in "um poema".chars() {
            assert!(apply(&mut app, Action::Char(c)).is_none());
        }
        match apply(&mut app, Action::Submit) {
            Some(SubmitOutcome::Dispatched(request)) => assert_eq!(request.user_goal, "um poema"),
            other => panic!("unexpected: {:?}", other),
        }
        assert_eq!(apply(&mut app, Action::Submit), Some(SubmitOutcome::Ignored));
    }

    #[test]
    fn test_apply_quit() {
        let mut app = App::new();
        apply(&mut app, Action::Quit);
        assert!(app.should_quit());
    }
}
