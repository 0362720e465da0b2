//! Classified failures reported by the link and metrics stores.
//!
//! Store implementations translate their vendor errors into one of three
//! classes so that services never inspect driver-specific error codes.
//! The translation itself lives next to each implementation in
//! [`crate::infrastructure`].

use thiserror::Error;

/// A store failure, classified by how callers should react to it.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A uniqueness constraint rejected the write.
    #[error("unique constraint violated: {constraint}")]
    Conflict { constraint: String },

    /// The store could not be reached or timed out; retrying may succeed.
    #[error("store temporarily unavailable: {0}")]
    Transient(String),

    /// Any other failure.
    #[error("store error: {0}")]
    Other(String),
}

impl StoreError {
    pub fn conflict(constraint: impl Into<String>) -> Self {
        Self::Conflict {
            constraint: constraint.into(),
        }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }

    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Transient(_))
    }
}
