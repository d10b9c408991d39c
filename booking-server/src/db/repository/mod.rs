//! Repository Module
//!
//! CRUD access per table: free async functions taking a pool or an open
//! transaction. Anything that must observe transaction isolation (the
//! availability re-check, rule overlap validation, status flips) accepts
//! `impl SqliteExecutor` so it runs inside the caller's transaction.

pub mod activity;
pub mod booking;
pub mod room;
pub mod room_type;
pub mod seasonal_rate;
pub mod service_item;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => RepoError::NotFound("Row not found".to_string()),
            other => RepoError::Database(other.to_string()),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
