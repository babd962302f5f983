// src/errors.rs
// DOCUMENTATION: Repository error types
// PURPOSE: Centralized error handling for the data-access layer

use thiserror::Error;

/// Repository-specific error types
/// DOCUMENTATION: Driver failures are carried unchanged as the source.
/// Only lookups with no row, affected-row anomalies and bad cursors are
/// synthesized here.
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("{entity} not found with id: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("unexpected behavior, total affected: {0}")]
    UnexpectedRowsAffected(u64),

    #[error("Invalid cursor: {0}")]
    InvalidCursor(String),
}

impl RepositoryError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        RepositoryError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// True when a lookup matched no row
    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound { .. })
    }
}

/// Check a statement touched exactly one row
/// DOCUMENTATION: Used by delete and update; zero or several affected rows
/// are reported instead of being ignored
pub fn ensure_single_row(rows_affected: u64) -> Result<(), RepositoryError> {
    if rows_affected != 1 {
        return Err(RepositoryError::UnexpectedRowsAffected(rows_affected));
    }
    Ok(())
}
