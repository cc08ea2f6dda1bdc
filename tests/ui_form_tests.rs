//! Form session tests
//!
//! Exercises the submit/complete cycle of `App` against a fake-backed
//! generator, the way the event loop drives it.

use metaprompt::llm::adapters::{FakeTransport, GeminiAdapter, Transport};
use metaprompt::llm::{
    GeneratedResult, PromptGenerator, Tone, EMPTY_GOAL_MESSAGE, GENERATION_FAILED_MESSAGE,
};
use metaprompt::platforms::TargetPlatform;
use metaprompt::ui::{apply, map_key, Action, App, Focus, SubmitOutcome};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;

fn load_fixture(name: &str) -> String {
    let path = PathBuf::from("tests/fixtures").join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", path.display()))
}

fn generator(transport: FakeTransport) -> PromptGenerator<GeminiAdapter> {
    PromptGenerator::new(GeminiAdapter::with_transport(
        "https://gemini.test/v1beta".to_string(),
        "gemini-3-pro-preview".to_string(),
        "test-key".to_string(),
        Transport::Fake(transport),
    ))
}

fn calls(generator: &PromptGenerator<GeminiAdapter>) -> usize {
    generator
        .adapter()
        .transport()
        .as_fake()
        .map(|t| t.calls())
        .unwrap_or_default()
}

/// Submit and, if dispatched, run the generation to completion
async fn submit_and_run(app: &mut App, generator: &PromptGenerator<GeminiAdapter>) -> SubmitOutcome {
    let outcome = app.submit();
    if let SubmitOutcome::Dispatched(ref request) = outcome {
        let result = generator.generate(request).await;
        app.complete(result);
    }
    outcome
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        let key = KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
        if let Some(action) = map_key(key) {
            apply(app, action);
        }
    }
}

#[tokio::test]
async fn test_whitespace_goal_is_rejected_without_call() {
    let generator = generator(FakeTransport::new(&load_fixture("gemini_success.json")));
    let mut app = App::new();
    app.user_goal = "   \n\t ".to_string();

    let outcome = submit_and_run(&mut app, &generator).await;

    assert_eq!(outcome, SubmitOutcome::Rejected);
    assert_eq!(app.error(), Some(EMPTY_GOAL_MESSAGE));
    assert!(!app.is_loading());
    assert_eq!(calls(&generator), 0);
}

#[tokio::test]
async fn test_successful_generation_shows_result() {
    let generator = generator(FakeTransport::new(&load_fixture("gemini_success.json")));
    let mut app = App::new();
    app.select_platform(TargetPlatform::Lovable);
    type_text(&mut app, "um jogo da cobrinha");

    match submit_and_run(&mut app, &generator).await {
        SubmitOutcome::Dispatched(request) => {
            assert_eq!(request.user_goal, "um jogo da cobrinha");
            assert_eq!(request.target_platform, TargetPlatform::Lovable);
            assert_eq!(request.tone, Tone::Professional);
            assert!(request.include_context);
        }
        other => panic!("unexpected outcome: {:?}", other),
    }

    assert!(!app.is_loading());
    assert!(app.error().is_none());
    let result = app.result().expect("result shown");
    assert!(result.markdown.starts_with("# Snake Game"));
    assert_eq!(calls(&generator), 1);
}

#[test]
fn test_submit_while_loading_is_noop() {
    let mut app = App::new();
    app.user_goal = "escrever um haicai".to_string();

    assert!(matches!(app.submit(), SubmitOutcome::Dispatched(_)));
    assert!(app.is_loading());
    assert_eq!(app.submit_label(), "Processando...");
    assert!(!app.can_submit());

    app.user_goal = "outra coisa".to_string();
    assert_eq!(app.submit(), SubmitOutcome::Ignored);
    assert!(app.is_loading());
    assert!(app.error().is_none());
}

#[tokio::test]
async fn test_failure_clears_previous_result() {
    let mut app = App::new();
    app.user_goal = "um poema".to_string();

    let ok = generator(FakeTransport::new(&load_fixture("gemini_success.json")));
    submit_and_run(&mut app, &ok).await;
    assert!(app.result().is_some());

    let failing = generator(FakeTransport::with_status(500, "boom"));
    submit_and_run(&mut app, &failing).await;

    assert!(!app.is_loading());
    assert!(app.result().is_none());
    assert_eq!(app.error(), Some(GENERATION_FAILED_MESSAGE));
}

#[tokio::test]
async fn test_network_failure_clears_result_and_loading() {
    let mut app = App::new();
    app.user_goal = "um app de lista de tarefas".to_string();

    let ok = generator(FakeTransport::new(&load_fixture("gemini_success.json")));
    submit_and_run(&mut app, &ok).await;
    assert!(app.result().is_some());

    let offline = generator(FakeTransport::with_error("connection reset by peer"));
    let outcome = submit_and_run(&mut app, &offline).await;

    assert!(matches!(outcome, SubmitOutcome::Dispatched(_)));
    assert_eq!(calls(&offline), 1);
    assert!(!app.is_loading());
    assert!(app.result().is_none());
    assert_eq!(app.error(), Some(GENERATION_FAILED_MESSAGE));
}

#[tokio::test]
async fn test_malformed_reply_shows_generic_error() {
    let generator = generator(FakeTransport::new(&load_fixture("gemini_not_json.json")));
    let mut app = App::new();
    app.user_goal = "um poema".to_string();

    submit_and_run(&mut app, &generator).await;

    assert!(app.result().is_none());
    assert_eq!(app.error(), Some(GENERATION_FAILED_MESSAGE));
}

#[test]
fn test_new_submit_clears_old_result_and_error() {
    let mut app = App::new();
    app.user_goal = "x".to_string();
    app.submit();
    app.complete(Ok(GeneratedResult {
        markdown: "old".to_string(),
        explanation: "old".to_string(),
    }));

    assert!(matches!(app.submit(), SubmitOutcome::Dispatched(_)));
    assert!(app.result().is_none());
    assert!(app.error().is_none());
}

#[test]
fn test_keyboard_selects_platform_and_tone() {
    let mut app = App::new();
    assert_eq!(app.focus, Focus::Goal);

    // Goal -> Tone
    apply(&mut app, Action::NextFocus);
    apply(&mut app, Action::SelectNext);
    assert_eq!(app.tone, Tone::Creative);

    // Tone -> Platform
    apply(&mut app, Action::NextFocus);
    for _ in 0..4 {
        apply(&mut app, Action::SelectNext);
    }
    assert_eq!(app.selected_platform, TargetPlatform::Lovable);
    apply(&mut app, Action::SelectNext);
    assert_eq!(app.selected_platform, TargetPlatform::NanoBanana);
}

#[tokio::test]
async fn test_copy_after_success_writes_osc52() {
    let generator = generator(FakeTransport::new(&load_fixture("gemini_success.json")));
    let mut app = App::new();
    app.user_goal = "snake".to_string();
    submit_and_run(&mut app, &generator).await;

    let mut terminal_out = Vec::new();
    let text = app.copy_text().expect("result to copy").to_string();
    metaprompt::ui::copy_to_clipboard(&mut terminal_out, &text).unwrap();
    app.mark_copied();

    let written = String::from_utf8(terminal_out).unwrap();
    assert!(written.starts_with("\x1b]52;c;"));
    assert!(written.ends_with('\x07'));
    assert!(app.is_copied());
}
