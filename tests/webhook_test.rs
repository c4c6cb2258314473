//! Integration tests for POST /webhook — the platform push path that
//! always fences, never classifies, and only detects language on request.

use codefence::{config::ServiceConfig, rest, AppContext};
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::Arc;

async fn spawn_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let config = ServiceConfig {
        port: addr.port(),
        bind_address: "127.0.0.1".to_string(),
        log_level: "error".to_string(),
        log_format: "pretty".to_string(),
        log_file: None,
        integration_path: PathBuf::from("integration.json"),
    };
    let ctx = Arc::new(AppContext::new(config));
    let router = rest::build_router(ctx);

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{addr}")
}

async fn post_webhook(base: &str, body: Value) -> reqwest::Response {
    reqwest::Client::new()
        .post(format!("{base}/webhook"))
        .json(&body)
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn missing_message_field_is_rejected() {
    let base = spawn_server().await;
    let resp = post_webhook(&base, json!({ "event_name": "message_received" })).await;
    assert_eq!(resp.status(), reqwest::StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("required fields"));
}

#[tokio::test]
async fn missing_event_name_is_rejected() {
    let base = spawn_server().await;
    let resp = post_webhook(&base, json!({ "message": "hi" })).await;
    assert_eq!(resp.status(), reqwest::StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn html_is_stripped_and_language_forced_to_plaintext() {
    let base = spawn_server().await;
    // No detectLanguage setting: the tag stays plaintext no matter what
    // the content looks like.
    let resp = post_webhook(
        &base,
        json!({
            "event_name": "message_received",
            "message": "<p>def f():</p><p>    return 1</p>"
        }),
    )
    .await;
    assert!(resp.status().is_success());

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "success");
    assert_eq!(body["username"], "code-formatter-bot");
    assert_eq!(body["message"], "```plaintext\ndef f():\n    return 1\n```");
}

#[tokio::test]
async fn truthy_detect_language_setting_enables_detection() {
    let base = spawn_server().await;
    let resp = post_webhook(
        &base,
        json!({
            "event_name": "message_received",
            "message": "def f():\n    return 1",
            "settings": [{
                "label": "detectLanguage",
                "type": "checkbox",
                "default": true,
                "required": true
            }]
        }),
    )
    .await;

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "```python\ndef f():\n    return 1\n```");
}

#[tokio::test]
async fn falsy_detect_language_setting_keeps_plaintext() {
    let base = spawn_server().await;
    let resp = post_webhook(
        &base,
        json!({
            "event_name": "message_received",
            "message": "def f():\n    return 1",
            "settings": [{
                "label": "detectLanguage",
                "type": "checkbox",
                "default": false,
                "required": true
            }]
        }),
    )
    .await;

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "```plaintext\ndef f():\n    return 1\n```");
}

#[tokio::test]
async fn short_plain_message_is_still_fenced() {
    // This path skips the classifier and minLines entirely.
    let base = spawn_server().await;
    let resp = post_webhook(
        &base,
        json!({ "event_name": "message_received", "message": "hi" }),
    )
    .await;

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "```plaintext\nhi\n```");
}

#[tokio::test]
async fn other_events_are_ignored() {
    let base = spawn_server().await;
    let resp = post_webhook(
        &base,
        json!({ "event_name": "user_joined", "message": "welcome" }),
    )
    .await;
    assert!(resp.status().is_success());

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "status": "ignored" }));
}
