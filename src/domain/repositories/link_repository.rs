//! Repository trait for short link data access.

use crate::domain::StoreError;
use crate::domain::entities::{Link, NewLink};
use async_trait::async_trait;

/// Repository interface for managing short links.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - Process-local implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link and returns it with its store-assigned fields.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Conflict`] if the code is already taken. This is
    /// the authoritative duplicate check; callers may pre-check with
    /// [`Self::find_by_code`] but must still handle this case.
    async fn create(&self, new_link: NewLink) -> Result<Link, StoreError>;

    /// Finds a link by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, StoreError>;

    /// Lists every link, newest first.
    ///
    /// Ordered by `created_at` descending, ties broken by `id` descending.
    async fn list_newest_first(&self) -> Result<Vec<Link>, StoreError>;

    /// Checks if the store answers queries.
    async fn health_check(&self) -> bool;
}
