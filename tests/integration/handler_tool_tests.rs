//! Handler-level tests for tool dispatch through `NotesServer`.

use serde_json::json;

use super::test_helpers::{call, empty_server, seeded_server};

#[tokio::test]
async fn create_then_duplicate_conflicts() {
    let server = empty_server();

    let (text, is_error) = call(&server, "create_note", json!({"id": "todo", "content": "a"})).await;
    assert!(!is_error);
    assert_eq!(text, "Note \"todo\" created successfully");

    let (text, is_error) = call(&server, "create_note", json!({"id": "todo", "content": "b"})).await;
    assert!(is_error);
    assert_eq!(text, "Error: Note with ID \"todo\" already exists");

    let store = server.state().notes.lock().await;
    assert_eq!(store.len(), 1);
    assert_eq!(store.get("todo").map(|n| n.content.as_str()), Some("a"));
}

#[tokio::test]
async fn update_keeps_created_at() {
    let server = empty_server();
    call(&server, "create_note", json!({"id": "todo", "content": "buy milk"})).await;
    let created = server
        .state()
        .notes
        .lock()
        .await
        .get("todo")
        .expect("stored")
        .created();

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let (text, is_error) =
        call(&server, "update_note", json!({"id": "todo", "content": "buy bread"})).await;
    assert!(!is_error, "{text}");

    let store = server.state().notes.lock().await;
    let note = store.get("todo").expect("stored");
    assert_eq!(note.content, "buy bread");
    assert_eq!(note.created(), created);
    assert!(note.updated() >= created);
}

#[tokio::test]
async fn update_missing_is_flagged() {
    let server = empty_server();
    let (text, is_error) =
        call(&server, "update_note", json!({"id": "ghost", "content": "x"})).await;
    assert!(is_error);
    assert_eq!(text, "Error: Note with ID \"ghost\" not found");
}

#[tokio::test]
async fn delete_missing_is_flagged_and_store_unchanged() {
    let server = seeded_server();
    let (text, is_error) = call(&server, "delete_note", json!({"id": "ghost"})).await;
    assert!(is_error);
    assert_eq!(text, "Error: Note with ID \"ghost\" not found");
    let store = server.state().notes.lock().await;
    assert_eq!(store.len(), 1);
    assert!(store.has("welcome"));
}

#[tokio::test]
async fn delete_existing_removes_it() {
    let server = seeded_server();
    let (_, is_error) = call(&server, "delete_note", json!({"id": "welcome"})).await;
    assert!(!is_error);
    assert!(server.state().notes.lock().await.is_empty());
}

#[tokio::test]
async fn calculate_variants() {
    let server = empty_server();
    for (op, expected) in [
        ("add", "Result: 6 add 3 = 9"),
        ("subtract", "Result: 6 subtract 3 = 3"),
        ("multiply", "Result: 6 multiply 3 = 18"),
        ("divide", "Result: 6 divide 3 = 2"),
    ] {
        let (text, is_error) =
            call(&server, "calculate", json!({"operation": op, "a": 6, "b": 3})).await;
        assert!(!is_error);
        assert_eq!(text, expected);
    }
}

#[tokio::test]
async fn calculate_divide_by_zero_is_flagged() {
    let server = empty_server();
    let (text, is_error) =
        call(&server, "calculate", json!({"operation": "divide", "a": 1, "b": 0})).await;
    assert!(is_error);
    assert_eq!(text, "Error: Cannot divide by zero");
}

#[tokio::test]
async fn calculate_unknown_operation_is_flagged() {
    let server = empty_server();
    let (text, is_error) =
        call(&server, "calculate", json!({"operation": "pow", "a": 2, "b": 8})).await;
    assert!(is_error);
    assert_eq!(text, "Error: Unknown operation: pow");
}

#[tokio::test]
async fn random_number_with_equal_bounds() {
    let server = empty_server();
    let (text, is_error) = call(&server, "random_number", json!({"min": 5, "max": 5})).await;
    assert!(!is_error);
    assert_eq!(text, "Random number between 5 and 5: 5");
}

#[tokio::test]
async fn random_number_inverted_bounds_flagged() {
    let server = empty_server();
    let (text, is_error) = call(&server, "random_number", json!({"min": 9, "max": 1})).await;
    assert!(is_error);
    assert!(text.starts_with("Error: invalid arguments:"), "{text}");
}

#[tokio::test]
async fn transform_text_examples() {
    let server = empty_server();
    let (text, _) = call(
        &server,
        "transform_text",
        json!({"text": "Hello World", "operation": "word_count"}),
    )
    .await;
    assert_eq!(text, "Result: 2");

    let (text, _) = call(
        &server,
        "transform_text",
        json!({"text": "abc", "operation": "reverse"}),
    )
    .await;
    assert_eq!(text, "Result: cba");
}

#[tokio::test]
async fn unknown_tool_is_flagged() {
    let server = empty_server();
    let (text, is_error) = call(&server, "launch_rocket", json!({})).await;
    assert!(is_error);
    assert_eq!(text, "Error: Unknown tool: launch_rocket");
}
