//! Link store implementations.
//!
//! # Repositories
//!
//! - [`PgLinkRepository`] - PostgreSQL storage over the `short_links` table
//! - [`InMemoryLinkRepository`] - Process-local storage for development and tests
//!
//! SQLx errors are classified in [`error`] so that nothing above this layer
//! inspects PostgreSQL error codes.

pub mod error;
pub mod memory_link_repository;
pub mod pg_link_repository;

pub use memory_link_repository::InMemoryLinkRepository;
pub use pg_link_repository::PgLinkRepository;
