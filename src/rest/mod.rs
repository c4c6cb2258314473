// rest/mod.rs — HTTP server for the chat platform integration.
//
// Endpoints:
//   POST /format-message
//   POST /webhook
//   GET  /
//   GET  /health
//   GET  /integration.json
//   anything else → 404

pub mod routes;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::AppContext;

pub async fn start_rest_server(ctx: Arc<AppContext>) -> Result<()> {
    let bind = format!("{}:{}", ctx.config.bind_address, ctx.config.port);
    let addr: SocketAddr = bind.parse()?;

    let router = build_router(ctx);

    info!("listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}

pub fn build_router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/", get(routes::health::home))
        .route("/health", get(routes::health::health))
        .route("/integration.json", get(routes::health::integration_json))
        .route("/format-message", post(routes::format::format_message))
        .route("/webhook", post(routes::webhook::webhook))
        .fallback(routes::health::not_found)
        // The platform calls in from its own origin.
        .layer(CorsLayer::permissive())
        .with_state(ctx)
}
