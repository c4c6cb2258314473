// rest/routes/webhook.rs — POST /webhook.
//
// The platform's push path. Unlike /format-message this path never
// consults the classifier, never checks for existing fences, and ignores
// minLines: every message_received event comes back fenced. Language
// detection runs only when the payload carries a truthy detectLanguage
// setting. The two paths evolved independently on the platform side and
// are kept separate on purpose.

use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::debug;

use super::{BOT_USERNAME, EVENT_MESSAGE_FORMATTED};
use crate::html::strip_html;
use crate::language::{detect_language, PLAINTEXT};
use crate::settings::is_truthy;
use crate::AppContext;

pub async fn webhook(
    State(_ctx): State<Arc<AppContext>>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    debug!(payload = %payload, "received webhook");

    if payload.get("event_name").is_none() || payload.get("message").is_none() {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "error": "Missing required fields: 'event_name' or 'message'"
            })),
        ));
    }

    let event_name = payload["event_name"].as_str().unwrap_or_default();
    let raw_message = payload["message"].as_str().unwrap_or_default();

    let cleaned = strip_html(raw_message);

    // Detect only when a truthy detectLanguage setting is present.
    let mut language = PLAINTEXT;
    for setting in payload["settings"].as_array().into_iter().flatten() {
        if setting["label"].as_str() == Some("detectLanguage")
            && is_truthy(&setting["default"])
        {
            language = detect_language(&cleaned);
        }
    }

    if event_name == "message_received" {
        let formatted = format!("```{language}\n{cleaned}\n```");
        let response = json!({
            "event_name": EVENT_MESSAGE_FORMATTED,
            "message": formatted,
            "status": "success",
            "username": BOT_USERNAME,
        });
        debug!(response = %response, "sending webhook response");
        return Ok(Json(response));
    }

    Ok(Json(json!({ "status": "ignored" })))
}
