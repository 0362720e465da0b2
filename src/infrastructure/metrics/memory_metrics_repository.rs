//! In-memory click counters.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::debug;

use crate::domain::StoreError;
use crate::domain::entities::CodeScore;
use crate::domain::repositories::MetricsRepository;

/// Process-local counters with sorted-set semantics.
///
/// Range queries return members ordered by score, then by code, as Redis
/// does for equal scores.
pub struct InMemoryMetricsRepository {
    scores: Mutex<HashMap<String, i64>>,
}

impl InMemoryMetricsRepository {
    pub fn new() -> Self {
        debug!("Using in-memory metrics store");
        Self {
            scores: Mutex::new(HashMap::new()),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, i64>>, StoreError> {
        self.scores
            .lock()
            .map_err(|_| StoreError::Other("metrics store lock poisoned".to_string()))
    }
}

impl Default for InMemoryMetricsRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MetricsRepository for InMemoryMetricsRepository {
    async fn increment(&self, code: &str, amount: i64) -> Result<i64, StoreError> {
        let mut scores = self.lock()?;

        let score = scores.entry(code.to_string()).or_insert(0);
        *score += amount;

        Ok(*score)
    }

    async fn range_by_score(&self, min: i64, max: i64) -> Result<Vec<CodeScore>, StoreError> {
        let scores = self.lock()?;

        let mut members: Vec<CodeScore> = scores
            .iter()
            .filter(|(_, score)| (min..=max).contains(*score))
            .map(|(code, score)| CodeScore::new(code.clone(), *score))
            .collect();
        members.sort_by(|a, b| a.score.cmp(&b.score).then_with(|| a.code.cmp(&b.code)));

        Ok(members)
    }

    async fn health_check(&self) -> bool {
        self.scores.lock().is_ok()
    }
}
