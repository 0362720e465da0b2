//! Handlers for link listing and creation.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::links::{CreateLinkRequest, CreateLinkResponse, LinkItem};
use crate::error::AppError;
use crate::state::AppState;

/// Lists every short link, newest first.
///
/// # Endpoint
///
/// `GET /api/links`
///
/// # Response
///
/// ```json
/// [
///   {
///     "id": 2,
///     "code": "xyz",
///     "original_url": "https://example.com/b",
///     "created_at": "2024-01-15T10:30:00Z"
///   }
/// ]
/// ```
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkItem>>, AppError> {
    let links = state.link_service.list_links().await?;

    Ok(Json(links.into_iter().map(LinkItem::from).collect()))
}

/// Creates a short link for a caller-chosen code.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// { "code": "docs", "url": "https://example.com/documentation" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "shortLinkId": 1 }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request with `validation_error` for malformed bodies,
/// codes shorter than three characters or invalid URLs, and with `conflict`
/// if the code is already taken. Returns 500 on unexpected store failures.
pub async fn create_link_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateLinkResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let link = state
        .link_service
        .create_link(payload.code, payload.url)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateLinkResponse {
            short_link_id: link.id,
        }),
    ))
}
