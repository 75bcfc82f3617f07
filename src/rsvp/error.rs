//! RSVP form error types

use thiserror::Error;

/// Errors raised by the RSVP form
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RsvpError {
    /// Submit was pressed before choosing yes or no
    #[error("attendance not selected")]
    AttendanceNotSelected,
}

/// Result type alias for RSVP form operations
pub type RsvpResult<T> = Result<T, RsvpError>;
