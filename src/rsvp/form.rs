//! RSVP form state machine
//!
//! ```text
//!   Editing ──submit()──▶ Submitted ──revise_again()──▶ Editing ...
//! ```
//!
//! `submit()` on an unanswered form fails and leaves the form editable.
//! Revising keeps every field value.

use serde::{Deserialize, Serialize};

use super::error::{RsvpError, RsvpResult};

/// Smallest party size accepted by the form
pub const MIN_PARTY_SIZE: u8 = 1;
/// Largest party size accepted by the form
pub const MAX_PARTY_SIZE: u8 = 5;

/// Answer to "will you be attending?"
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Attendance {
    #[default]
    #[serde(rename = "")]
    Unanswered,
    Yes,
    No,
}

impl Attendance {
    /// Parse a radio-button value; anything other than yes/no is unanswered
    pub fn from_input(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "yes" => Attendance::Yes,
            "no" => Attendance::No,
            _ => Attendance::Unanswered,
        }
    }

    /// Form value for this answer
    pub fn as_str(&self) -> &'static str {
        match self {
            Attendance::Unanswered => "",
            Attendance::Yes => "yes",
            Attendance::No => "no",
        }
    }
}

/// Where the form is in its lifecycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Editing,
    Submitted,
}

/// Data captured by a successful submit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RsvpSubmission {
    pub guest_id: String,
    pub attending: Attendance,
    /// Party size including the respondent; 0 when not attending
    pub guest_count: u8,
    #[serde(default)]
    pub message: String,
}

/// One guest's RSVP form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsvpForm {
    guest_id: String,
    attending: Attendance,
    guest_count: u8,
    message: String,
    state: FormState,
}

impl RsvpForm {
    /// Fresh, unanswered form for a guest
    pub fn new(guest_id: impl Into<String>) -> Self {
        Self {
            guest_id: guest_id.into(),
            attending: Attendance::Unanswered,
            guest_count: MIN_PARTY_SIZE,
            message: String::new(),
            state: FormState::Editing,
        }
    }

    /// Rebuild an editable form from raw field values
    pub fn from_input(
        guest_id: impl Into<String>,
        attending: &str,
        guest_count: &str,
        message: &str,
    ) -> Self {
        let mut form = Self::new(guest_id);
        form.set_attending(Attendance::from_input(attending));
        form.set_guest_count_input(guest_count);
        form.set_message(message);
        form
    }

    /// Rebuild a form that was already submitted, from the values it
    /// posted back. Without an answer the form stays in `Editing`.
    pub fn from_submitted_input(
        guest_id: impl Into<String>,
        attending: &str,
        guest_count: &str,
        message: &str,
    ) -> Self {
        let mut form = Self::from_input(guest_id, attending, guest_count, message);
        if form.attending != Attendance::Unanswered {
            form.state = FormState::Submitted;
        }
        form
    }

    pub fn guest_id(&self) -> &str {
        &self.guest_id
    }

    pub fn attending(&self) -> Attendance {
        self.attending
    }

    pub fn guest_count(&self) -> u8 {
        self.guest_count
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn is_submitted(&self) -> bool {
        self.state == FormState::Submitted
    }

    /// Whether the party-size field starts out visible
    pub fn shows_guest_count(&self) -> bool {
        self.attending == Attendance::Yes
    }

    pub fn set_attending(&mut self, attending: Attendance) {
        self.attending = attending;
    }

    /// Set party size, clamped to the accepted range
    pub fn set_guest_count(&mut self, count: u8) {
        self.guest_count = count.clamp(MIN_PARTY_SIZE, MAX_PARTY_SIZE);
    }

    /// Set party size from text input.
    ///
    /// Non-numeric input falls back to 1; numbers outside 1..=5 are clamped.
    pub fn set_guest_count_input(&mut self, input: &str) {
        self.guest_count = match input.trim().parse::<i64>() {
            Ok(n) => n.clamp(i64::from(MIN_PARTY_SIZE), i64::from(MAX_PARTY_SIZE)) as u8,
            Err(_) => MIN_PARTY_SIZE,
        };
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    /// Validate and move to `Submitted`
    pub fn submit(&mut self) -> RsvpResult<RsvpSubmission> {
        if self.attending == Attendance::Unanswered {
            return Err(RsvpError::AttendanceNotSelected);
        }

        let guest_count = match self.attending {
            Attendance::Yes => self.guest_count,
            _ => 0,
        };

        self.state = FormState::Submitted;

        Ok(RsvpSubmission {
            guest_id: self.guest_id.clone(),
            attending: self.attending,
            guest_count,
            message: self.message.clone(),
        })
    }

    /// Reopen a submitted form for editing, keeping its values
    pub fn revise_again(&mut self) {
        self.state = FormState::Editing;
    }
}
