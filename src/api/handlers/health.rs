//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with store checks.
///
/// # Endpoint
///
/// `GET /api/health`
///
/// # Response Codes
///
/// - **200 OK**: Both stores healthy
/// - **503 Service Unavailable**: One or more stores unreachable
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "link_store": { "status": "ok", "message": "Link store reachable" },
///     "metrics_store": { "status": "ok", "message": "Metrics store reachable" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let (links_ok, metrics_ok) = tokio::join!(
        state.link_service.is_healthy(),
        state.metrics_service.is_healthy()
    );

    let link_store =
        CheckStatus::from_probe(links_ok, "Link store reachable", "Link store unreachable");
    let metrics_store = CheckStatus::from_probe(
        metrics_ok,
        "Metrics store reachable",
        "Metrics store unreachable",
    );

    let all_healthy = link_store.is_ok() && metrics_store.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            link_store,
            metrics_store,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}
