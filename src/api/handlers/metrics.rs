//! Handler for the click metrics report.

use axum::{Json, extract::State};

use crate::api::dto::metrics::MetricItem;
use crate::error::AppError;
use crate::state::AppState;

/// Returns click counts per code, highest first.
///
/// # Endpoint
///
/// `GET /api/metrics`
///
/// Only codes whose click count lies between 0 and 50 inclusive are
/// reported; busier codes are omitted rather than truncated to a top list.
///
/// # Response
///
/// ```json
/// [
///   { "code": "docs", "clicks": 10 },
///   { "code": "blog", "clicks": 5 }
/// ]
/// ```
pub async fn metrics_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<MetricItem>>, AppError> {
    let scores = state.metrics_service.report().await?;

    Ok(Json(scores.into_iter().map(MetricItem::from).collect()))
}
