//! Tests for the built-in action and form handlers

use dialog_actions::{
    Action, Domain, Effect, FormHandler, GreetingHandler, NameCollectionHandler, Tracker,
};
use uuid::Uuid;

#[tokio::test]
async fn test_greeting_returns_exactly_one_effect() {
    // Setup
    let handler = GreetingHandler;
    let tracker = Tracker::new(Uuid::new_v4());
    let domain = Domain::default();

    // Execute
    let effects = handler.run(&tracker, &domain).await.unwrap();

    // Verify
    assert_eq!(effects.len(), 1);
    assert_eq!(effects[0], Effect::emit_message("utter_greet"));
}

#[tokio::test]
async fn test_greeting_is_idempotent() {
    let handler = GreetingHandler;
    let tracker = Tracker::new(Uuid::new_v4());
    let domain = Domain::default();

    let first = handler.run(&tracker, &domain).await.unwrap();
    let second = handler.run(&tracker, &domain).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_greeting_ignores_context_and_domain() {
    let handler = GreetingHandler;

    // A tracker with history and a populated domain change nothing
    let mut tracker = Tracker::new(Uuid::new_v4()).with_slot("user_name", serde_json::json!("Bob"));
    tracker.record_user_utterance("hello there");

    let mut domain = Domain::default();
    domain.insert_response("utter_greet", "Hey! How are you?");

    let effects = handler.run(&tracker, &domain).await.unwrap();

    assert_eq!(effects, vec![Effect::emit_message("utter_greet")]);
}

#[test]
fn test_form_declares_single_required_slot() {
    let handler = NameCollectionHandler;

    let empty = Tracker::new(Uuid::new_v4());
    assert_eq!(handler.required_slots(&empty), vec!["user_name"]);

    // Regardless of context contents
    let filled = Tracker::new(Uuid::new_v4())
        .with_slot("user_name", serde_json::json!("Alice"))
        .with_slot("city", serde_json::json!("Berlin"));
    assert_eq!(handler.required_slots(&filled), vec!["user_name"]);
}

#[tokio::test]
async fn test_form_submit_returns_exactly_one_effect() {
    // Setup
    let handler = NameCollectionHandler;
    let tracker = Tracker::new(Uuid::new_v4()).with_slot("user_name", serde_json::json!("Alice"));
    let domain = Domain::default();

    // Execute
    let effects = handler.on_submit(&tracker, &domain).await.unwrap();

    // Verify
    assert_eq!(effects.len(), 1);
    assert_eq!(effects[0], Effect::emit_message("utter_submit"));
}

#[tokio::test]
async fn test_form_submit_is_idempotent() {
    let handler = NameCollectionHandler;
    let tracker = Tracker::new(Uuid::new_v4()).with_slot("user_name", serde_json::json!("Alice"));
    let domain = Domain::default();

    let first = handler.on_submit(&tracker, &domain).await.unwrap();
    let second = handler.on_submit(&tracker, &domain).await.unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_form_progress_helpers() {
    let handler = NameCollectionHandler;

    let empty = Tracker::new(Uuid::new_v4());
    assert_eq!(handler.next_slot(&empty), Some("user_name".to_string()));
    assert!(!handler.is_complete(&empty));

    let filled = Tracker::new(Uuid::new_v4()).with_slot("user_name", serde_json::json!("Alice"));
    assert_eq!(handler.next_slot(&filled), None);
    assert!(handler.is_complete(&filled));
}
