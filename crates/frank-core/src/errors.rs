//! Cross-cutting error types for frank.
//!
//! Backend, auth and config errors live in their own crates. `CoreError`
//! covers what can go wrong before a request is ever issued.

use thiserror::Error;

/// Errors that can be raised by any frank crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Record lookup returned no result.
    #[error("Record not found: {table} {id}")]
    NotFound { table: String, id: String },

    /// Input failed validation (required field, range, date order).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
