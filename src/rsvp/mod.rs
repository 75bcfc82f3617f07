//! Guest RSVP
//!
//! - **form**: the per-view form state machine and its submission payload
//! - **page**: resolving a guest id to a form or the terminal not-found view
//! - **error**: error types

pub mod error;
pub mod form;
pub mod page;

pub use error::{RsvpError, RsvpResult};
pub use form::{Attendance, FormState, RsvpForm, RsvpSubmission, MAX_PARTY_SIZE, MIN_PARTY_SIZE};
pub use page::{GuestSummary, RsvpPage};
