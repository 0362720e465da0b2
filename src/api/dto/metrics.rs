//! DTOs for the metrics report.

use serde::Serialize;

use crate::domain::entities::CodeScore;

/// One row of `GET /api/metrics`.
#[derive(Debug, Serialize)]
pub struct MetricItem {
    pub code: String,
    pub clicks: i64,
}

impl From<CodeScore> for MetricItem {
    fn from(score: CodeScore) -> Self {
        Self {
            code: score.code,
            clicks: score.score,
        }
    }
}
