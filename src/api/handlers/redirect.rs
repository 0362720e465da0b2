//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::api::dto::links::CodePath;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Resolve the code (validated by [`LinkService::resolve`](crate::application::services::LinkService::resolve))
/// 2. Build the `Location` header from the stored URL
/// 3. Add one click to the code's counter (best-effort)
/// 4. Return 301 Moved Permanently
///
/// # Click Tracking
///
/// The counter increment is awaited before responding but its failure is
/// only logged; the redirect is served either way.
///
/// # Errors
///
/// Returns 400 Bad Request if the code is shorter than three characters.
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 500 if the stored URL is not a valid header value; no click is
/// counted in that case.
pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(params): Path<CodePath>,
) -> Result<Response, AppError> {
    let link = state.link_service.resolve(&params.code).await?;

    let location = HeaderValue::try_from(link.original_url.as_str()).map_err(|e| {
        tracing::error!(code = %link.code, error = %e, "Stored URL is not a valid Location header");
        AppError::internal("Internal error", json!({}))
    })?;

    state.metrics_service.record_click(&link.code).await;

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response())
}
