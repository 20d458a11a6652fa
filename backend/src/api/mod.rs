//! API module
//!
//! HTTP handlers and the router that wires them together.

pub mod chat;
pub mod health;
pub mod middleware;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::state::SharedState;

/// Build the application router
///
/// Routes:
/// * `POST /chat` - chat reply
/// * `GET /api/health` - health check
/// * everything else - static files from the configured directory
pub fn build_router(state: SharedState) -> Router {
    let static_files = ServeDir::new(&state.config.content.static_dir);

    Router::new()
        .route("/chat", post(chat::chat))
        .route("/api/health", get(health::health_check))
        .fallback_service(static_files)
        // Middleware (order matters - request_id should be first)
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(CorsLayer::permissive()) // Browser pages on other origins call /chat
        .with_state(state)
}
