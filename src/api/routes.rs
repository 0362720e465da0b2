//! API route configuration.

use crate::api::handlers::{
    create_link_handler, health_handler, list_links_handler, metrics_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Management API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `GET  /links`    - List all links, newest first
/// - `POST /links`    - Create a link for a chosen code
/// - `GET  /metrics`  - Click counts for codes with 0-50 clicks, highest first
/// - `GET  /health`   - Store connectivity report
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/links", get(list_links_handler).post(create_link_handler))
        .route("/metrics", get(metrics_handler))
        .route("/health", get(health_handler))
}
