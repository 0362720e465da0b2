//! DTOs for link redirect, listing and creation endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Link;

/// Path parameters of `GET /{code}`.
///
/// The code is checked by the link service, which the admin tool shares.
#[derive(Debug, Deserialize)]
pub struct CodePath {
    pub code: String,
}

/// Request body of `POST /api/links`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// Short code to register (at least three characters).
    #[validate(length(min = 3, message = "Code must be at least 3 characters"))]
    pub code: String,

    /// Target URL the code redirects to.
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,
}

/// Response of `POST /api/links`.
#[derive(Debug, Serialize)]
pub struct CreateLinkResponse {
    #[serde(rename = "shortLinkId")]
    pub short_link_id: i64,
}

/// One entry of `GET /api/links`.
#[derive(Debug, Serialize)]
pub struct LinkItem {
    pub id: i64,
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkItem {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            code: link.code,
            original_url: link.original_url,
            created_at: link.created_at,
        }
    }
}
