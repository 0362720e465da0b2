//! Infrastructure layer for external integrations.
//!
//! This layer implements the store contracts defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - Link store implementations (PostgreSQL and in-memory)
//! - [`metrics`] - Click counter implementations (Redis and in-memory)

pub mod metrics;
pub mod persistence;
