//! Database error types for frank-db.

use frank_core::errors::CoreError;
use thiserror::Error;

/// Errors from table API operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The table API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The access token was rejected (401/403).
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The table API returned 429 Too Many Requests.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// A row could not be decoded into its record type.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Input rejected before any request was issued.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Invalid state encountered (e.g., poisoned in-memory table lock).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<CoreError> for DatabaseError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation(message) => Self::Validation(message),
            CoreError::NotFound { .. } => Self::NoResult,
            CoreError::Other(e) => Self::Other(e),
        }
    }
}
