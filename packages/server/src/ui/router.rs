//! Route table.

use std::sync::Arc;

use axum::{Router, middleware, routing::get};
use tower_http::trace::TraceLayer;

use crate::ui::{
    handler::{generate_uuid, health_check, list_requests, not_found, require_get, welcome},
    state::AppState,
};

/// Build the application router.
///
/// Paths are matched exactly. The method guard wraps the fallback too, so
/// it runs before the 404 decision.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/api/health", get(health_check))
        .route("/api/uuid", get(generate_uuid))
        .route("/api/requests", get(list_requests))
        .fallback(not_found)
        .layer(middleware::from_fn(require_get))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
