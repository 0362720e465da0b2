//! Redis-backed click counters.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, RedisError, aio::ConnectionManager};
use tracing::{debug, info};

use crate::domain::StoreError;
use crate::domain::entities::CodeScore;
use crate::domain::repositories::MetricsRepository;

/// Click counters stored as members of one Redis sorted set.
///
/// Each code is a member and its score is the click count. Increments use
/// `ZINCRBY`, which is atomic on the server, so concurrent redirects never
/// lose a click. Connection reuse is handled by `ConnectionManager`.
pub struct RedisMetricsRepository {
    client: ConnectionManager,
    key: String,
}

impl RedisMetricsRepository {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `key` - Name of the sorted set holding the counters; controlled via
    ///   the `METRICS_KEY` env var
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Transient`] if the connection cannot be established
    /// or the PING fails, and [`StoreError::Other`] if the URL is invalid.
    pub async fn connect(redis_url: &str, key: impl Into<String>) -> Result<Self, StoreError> {
        let client = Client::open(redis_url)
            .map_err(|e| StoreError::Other(format!("Failed to create Redis client: {e}")))?;

        let manager = ConnectionManager::new(client).await?;

        let mut test_conn = manager.clone();
        test_conn.ping::<()>().await?;

        let key = key.into();
        info!(key = %key, "Connected to Redis metrics store");

        Ok(Self {
            client: manager,
            key,
        })
    }
}

#[async_trait]
impl MetricsRepository for RedisMetricsRepository {
    async fn increment(&self, code: &str, amount: i64) -> Result<i64, StoreError> {
        let mut conn = self.client.clone();

        let score: f64 = conn.zincr(&self.key, code, amount).await?;
        debug!("ZINCRBY {} {} {} -> {}", self.key, amount, code, score);

        Ok(score as i64)
    }

    async fn range_by_score(&self, min: i64, max: i64) -> Result<Vec<CodeScore>, StoreError> {
        let mut conn = self.client.clone();

        let members: Vec<(String, f64)> = conn
            .zrangebyscore_withscores(&self.key, min, max)
            .await?;

        Ok(members
            .into_iter()
            .map(|(code, score)| CodeScore::new(code, score as i64))
            .collect())
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}

/// Maps a Redis client error onto the store error classes.
///
/// Timeouts, dropped connections, refused connections and I/O failures are
/// [`StoreError::Transient`]; server-side command errors are [`StoreError::Other`].
pub fn classify_redis_error(e: RedisError) -> StoreError {
    if e.is_timeout() || e.is_connection_dropped() || e.is_connection_refusal() || e.is_io_error()
    {
        StoreError::Transient(e.to_string())
    } else {
        StoreError::Other(e.to_string())
    }
}

impl From<RedisError> for StoreError {
    fn from(e: RedisError) -> Self {
        classify_redis_error(e)
    }
}
