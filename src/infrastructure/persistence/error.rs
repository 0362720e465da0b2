//! Classification of SQLx errors into [`StoreError`].

use crate::domain::StoreError;

/// Maps a driver error onto the store error classes.
///
/// - unique violations become [`StoreError::Conflict`] carrying the constraint name
/// - pool exhaustion, closed pools and I/O failures become [`StoreError::Transient`]
/// - everything else becomes [`StoreError::Other`]
pub fn classify_sqlx_error(e: sqlx::Error) -> StoreError {
    if let Some(db) = e.as_database_error()
        && db.is_unique_violation()
    {
        return StoreError::conflict(db.constraint().unwrap_or("unknown"));
    }

    match e {
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_) => StoreError::Transient(e.to_string()),
        other => StoreError::Other(other.to_string()),
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        classify_sqlx_error(e)
    }
}
