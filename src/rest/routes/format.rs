// rest/routes/format.rs — POST /format-message.

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::warn;

use super::{BOT_USERNAME, EVENT_MESSAGE_FORMATTED};
use crate::formatter::format_code_blocks;
use crate::settings::Setting;
use crate::AppContext;

#[derive(Deserialize)]
pub struct FormatRequest {
    #[allow(dead_code)]
    pub channel_id: String,
    #[serde(default)]
    pub settings: Vec<Setting>,
    pub message: String,
}

/// Format a message on behalf of the platform. Failures never lose the
/// caller's content: the error envelope carries the original message
/// unchanged, with HTTP 200 and status "error".
pub async fn format_message(
    State(_ctx): State<Arc<AppContext>>,
    Json(req): Json<FormatRequest>,
) -> Json<Value> {
    if req.settings.is_empty() {
        return Json(error_result(&req.message, "Settings are required"));
    }

    match format_code_blocks(&req.message, &req.settings) {
        Ok(formatted) => Json(json!({
            "event_name": EVENT_MESSAGE_FORMATTED,
            "message": formatted,
            "status": "success",
            "username": BOT_USERNAME,
        })),
        Err(e) => {
            warn!(err = %e, "message formatting failed — returning original");
            Json(error_result(&req.message, &e.to_string()))
        }
    }
}

fn error_result(original: &str, error: &str) -> Value {
    json!({
        "event_name": EVENT_MESSAGE_FORMATTED,
        "message": original,
        "status": "error",
        "username": BOT_USERNAME,
        "error": error,
    })
}
