pub mod error;
pub mod rest;
pub mod state;

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue},
    routing::{delete, get, post},
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

pub use state::{AppState, SessionRegistry};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/", get(|| async { "ok" }))
        // Sessions
        .route("/api/sessions", post(rest::create_session))
        .route("/api/sessions/{id}", delete(rest::end_session))
        .route("/api/sessions/{id}/analyze", post(rest::analyze))
        .route("/api/sessions/{id}/analytics", get(rest::analytics))
        .route(
            "/api/sessions/{id}/analytics/reset",
            post(rest::reset_analytics),
        )
        .with_state(state)
        // Analyses are per-session and must never be cached
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        // Logging layer: method + path only (no bodies, no article text)
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        )
}
