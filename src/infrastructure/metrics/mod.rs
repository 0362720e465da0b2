//! Metrics store implementations.
//!
//! Provides two [`crate::domain::repositories::MetricsRepository`] implementations:
//! - [`RedisMetricsRepository`] - Production Redis sorted set
//! - [`InMemoryMetricsRepository`] - Process-local counters for development and tests

mod memory_metrics_repository;
mod redis_metrics_repository;

pub use memory_metrics_repository::InMemoryMetricsRepository;
pub use redis_metrics_repository::{RedisMetricsRepository, classify_redis_error};
