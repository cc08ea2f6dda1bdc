//! Form state
//!
//! Pure state machine; no terminal or network access. The event loop feeds
//! it actions and generation outcomes, and spawns the request it returns.
//!
//! Invariants:
//! - at most one generation in flight (`loading`)
//! - a dispatched submit clears the previous result and error
//! - an outcome replaces the result wholesale

use crate::llm::{GeneratedResult, GenerationError, PromptRequest, Tone};
use crate::platforms::TargetPlatform;

/// Which form control receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Platform,
    Goal,
    Tone,
}

impl Focus {
    pub fn next(self) -> Focus {
        match self {
            Focus::Platform => Focus::Goal,
            Focus::Goal => Focus::Tone,
            Focus::Tone => Focus::Platform,
        }
    }
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A generation is already running; nothing changed
    Ignored,
    /// Goal is empty; error set, nothing sent
    Rejected,
    /// Caller must run this request and report back via `complete`
    Dispatched(PromptRequest),
}

/// Main application state
#[derive(Debug)]
pub struct App {
    pub selected_platform: TargetPlatform,
    pub user_goal: String,
    pub tone: Tone,
    /// Always on in the form
    pub include_context: bool,
    pub focus: Focus,
    result: Option<GeneratedResult>,
    error: Option<String>,
    loading: bool,
    copied: bool,
    should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            selected_platform: TargetPlatform::NanoBanana,
            user_goal: String::new(),
            tone: Tone::Professional,
            include_context: true,
            focus: Focus::Goal,
            result: None,
            error: None,
            loading: false,
            copied: false,
            should_quit: false,
        }
    }

    pub fn result(&self) -> Option<&GeneratedResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Current result has been copied to the clipboard
    pub fn is_copied(&self) -> bool {
        self.copied
    }

    /// Markdown to copy, if there is a result
    pub fn copy_text(&self) -> Option<&str> {
        self.result.as_ref().map(|r| r.markdown.as_str())
    }

    pub fn mark_copied(&mut self) {
        self.copied = self.result.is_some();
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        !self.loading && !self.user_goal.trim().is_empty()
    }

    /// Start a generation for the current form values
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.loading {
            return SubmitOutcome::Ignored;
        }

        let request = PromptRequest::new(self.user_goal.clone(), self.selected_platform, self.tone)
            .with_context(self.include_context);
        if let Err(e) = request.validate() {
            self.error = Some(e.to_string());
            return SubmitOutcome::Rejected;
        }

        self.loading = true;
        self.error = None;
        self.result = None;
        self.copied = false;
        SubmitOutcome::Dispatched(request)
    }

    /// Apply the outcome of a dispatched generation
    pub fn complete(&mut self, outcome: Result<GeneratedResult, GenerationError>) {
        self.loading = false;
        self.copied = false;
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.error = None;
            }
            Err(e) => {
                self.result = None;
                self.error = Some(e.to_string());
            }
        }
    }

    pub fn input_char(&mut self, c: char) {
        self.user_goal.push(c);
        self.clear_error();
    }

    pub fn backspace(&mut self) {
        self.user_goal.pop();
        self.clear_error();
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn select_platform(&mut self, platform: TargetPlatform) {
        self.selected_platform = platform;
    }

    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.next();
    }

    /// Up/Down on the focused selector
    pub fn select_next(&mut self) {
        match self.focus {
            Focus::Platform => self.selected_platform = self.selected_platform.next(),
            Focus::Tone => self.tone = self.tone.next(),
            Focus::Goal => {}
        }
    }

    pub fn select_prev(&mut self) {
        match self.focus {
            Focus::Platform => self.selected_platform = self.selected_platform.prev(),
            Focus::Tone => self.tone = self.tone.prev(),
            Focus::Goal => {}
        }
    }

    /// Text shown on the submit control
    pub fn submit_label(&self) -> &'static str {
        if self.loading {
            "Processando..."
        } else {
            "Gerar Prompt"
        }
    }
}
