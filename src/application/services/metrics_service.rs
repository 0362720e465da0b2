//! Click recording and metrics report service.

use std::sync::Arc;

use crate::domain::entities::CodeScore;
use crate::domain::repositories::MetricsRepository;
use crate::error::AppError;
use tracing::{debug, warn};

/// Lowest score included in the metrics report.
pub const REPORT_MIN_SCORE: i64 = 0;

/// Highest score included in the metrics report.
///
/// Codes above this score are left out of the report entirely; the bound
/// filters on the click count, it does not cap the number of rows.
pub const REPORT_MAX_SCORE: i64 = 50;

/// Service for per-code click counters.
pub struct MetricsService {
    metrics_repository: Arc<dyn MetricsRepository>,
}

impl MetricsService {
    /// Creates a new metrics service.
    pub fn new(metrics_repository: Arc<dyn MetricsRepository>) -> Self {
        Self { metrics_repository }
    }

    /// Adds one click to the counter for `code`.
    ///
    /// Best-effort: a failing metrics store is logged and otherwise ignored
    /// so that redirects never depend on it. Client retries may count the
    /// same visit twice.
    pub async fn record_click(&self, code: &str) {
        match self.metrics_repository.increment(code, 1).await {
            Ok(clicks) => debug!(code, clicks, "Click recorded"),
            Err(e) => warn!(code, error = %e, "Failed to record click"),
        }
    }

    /// Returns the counters with a score in
    /// [`REPORT_MIN_SCORE`]..=[`REPORT_MAX_SCORE`], highest score first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the metrics store fails.
    pub async fn report(&self) -> Result<Vec<CodeScore>, AppError> {
        let mut scores = self
            .metrics_repository
            .range_by_score(REPORT_MIN_SCORE, REPORT_MAX_SCORE)
            .await?;

        scores.sort_by(|a, b| b.score.cmp(&a.score));

        Ok(scores)
    }

    /// Reports whether the metrics store is reachable.
    pub async fn is_healthy(&self) -> bool {
        self.metrics_repository.health_check().await
    }
}
