//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`Link`] - A short code mapped to its target URL
//! - [`CodeScore`] - A click counter as stored in the metrics store
//!
//! Records are created through a separate input struct ([`NewLink`]) because
//! the identifier and creation timestamp are assigned by the store.

pub mod link;
pub mod metric;

pub use link::{Link, NewLink};
pub use metric::CodeScore;
