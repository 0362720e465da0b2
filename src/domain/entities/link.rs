//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL link with metadata.
///
/// `id` and `created_at` are assigned by the link store on insertion and never
/// change afterwards. `code` is unique across all links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: i64,
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(id: i64, code: String, original_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            code,
            original_url,
            created_at,
        }
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub code: String,
    pub original_url: String,
}

impl NewLink {
    pub fn new(code: impl Into<String>, original_url: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            original_url: original_url.into(),
        }
    }
}
