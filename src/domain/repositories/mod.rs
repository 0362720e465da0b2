//! Repository trait definitions for the domain layer.
//!
//! These traits are the contracts the service holds with its two external
//! stores. They are implemented in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for store operations
//! - Implementations live in `crate::infrastructure`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`LinkRepository`] - Link lookup, insertion and ordered listing
//! - [`MetricsRepository`] - Click counter increments and score-range queries

pub mod link_repository;
pub mod metrics_repository;

pub use link_repository::LinkRepository;
pub use metrics_repository::MetricsRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
#[cfg(test)]
pub use metrics_repository::MockMetricsRepository;
