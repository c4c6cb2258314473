// rest/routes/health.rs — liveness, health, and the integration document.

use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::warn;

use crate::AppContext;

pub async fn home() -> Json<Value> {
    Json(json!({ "message": "Code Formatter API is running!" }))
}

pub async fn health(State(ctx): State<Arc<AppContext>>) -> Json<Value> {
    let uptime = ctx.started_at.elapsed().as_secs();
    Json(json!({
        "status": "healthy",
        "uptime_secs": uptime,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Serve the static integration descriptor the platform polls for
/// capability discovery. Missing file → 404; a file that exists but does
/// not parse is a deployment bug and comes back as 500.
pub async fn integration_json(
    State(ctx): State<Arc<AppContext>>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let path = &ctx.config.integration_path;
    let contents = tokio::fs::read_to_string(path).await.map_err(|e| {
        warn!(path = %path.display(), err = %e, "integration document not readable");
        (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "configuration not found" })),
        )
    })?;

    let doc: Value = serde_json::from_str(&contents).map_err(|e| {
        warn!(path = %path.display(), err = %e, "integration document is not valid JSON");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "configuration is not valid JSON" })),
        )
    })?;

    Ok(Json(doc))
}

pub async fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not Found" })))
}
