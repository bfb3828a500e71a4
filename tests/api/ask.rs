use serde_json::{json, Value};

use crate::helpers::{spawn_app, spawn_app_with_failing_completion};

#[tokio::test]
async fn ask_returns_completion_as_message() {
    let app = spawn_app("Please stay hydrated and rest.").await;

    let response = app
        .post_json("/ask", &json!({"message": "I have a mild fever."}))
        .await;

    assert_eq!(200, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"message": "Please stay hydrated and rest."}));

    let calls = app.completion_calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].0.contains("medical professional"));
    assert_eq!(calls[0].1, "I have a mild fever.");
}

#[tokio::test]
async fn ask_collapses_completion_failure() {
    let app = spawn_app_with_failing_completion().await;

    let response = app.post_json("/ask", &json!({"message": "Hello"})).await;

    assert_eq!(500, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"error": "Something went wrong"}));
}

#[tokio::test]
async fn ask_rejects_body_without_message() {
    let app = spawn_app("unused").await;

    let response = app.post_json("/ask", &json!({"question": "Hello"})).await;

    assert_eq!(400, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].is_string());
    assert!(app.completion_calls().is_empty());
}
