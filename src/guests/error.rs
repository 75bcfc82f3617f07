//! Guest list error types

use thiserror::Error;

/// Errors raised by guest list operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuestError {
    /// A required field was missing
    #[error("Validation error: {0}")]
    Validation(String),

    /// Guest id is not in the directory
    #[error("Guest not found: {0}")]
    NotFound(String),
}

/// Result type alias for guest list operations
pub type GuestResult<T> = Result<T, GuestError>;
