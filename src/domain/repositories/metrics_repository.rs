//! Repository trait for per-code click counters.

use crate::domain::StoreError;
use crate::domain::entities::CodeScore;
use async_trait::async_trait;

/// Repository interface for click counters.
///
/// Counters behave like members of a sorted set: they are created on first
/// increment and can be queried by score range.
///
/// # Implementations
///
/// - [`crate::infrastructure::metrics::RedisMetricsRepository`] - Redis sorted set
/// - [`crate::infrastructure::metrics::InMemoryMetricsRepository`] - Process-local implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetricsRepository: Send + Sync {
    /// Atomically adds `amount` to the counter for `code`.
    ///
    /// Returns the counter value after the increment.
    async fn increment(&self, code: &str, amount: i64) -> Result<i64, StoreError>;

    /// Returns every counter whose score lies in `[min, max]` (inclusive).
    ///
    /// Results are ordered by score ascending, then by code, which is the
    /// order a sorted-set range query yields. This is a filter on the score
    /// value, not a limit on the number of results.
    async fn range_by_score(&self, min: i64, max: i64) -> Result<Vec<CodeScore>, StoreError>;

    /// Checks if the store answers commands.
    async fn health_check(&self) -> bool;
}
