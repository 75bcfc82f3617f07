//! Core data types for the guest list
//!
//! - `Guest`: an invitee and their current response
//! - `GuestStatus`: pending / attending / not-attending
//! - `GuestStats`: aggregate tallies shown on the dashboard

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// RSVP status of a guest
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum GuestStatus {
    /// No response yet
    #[default]
    Pending,
    /// Accepted the invitation
    Attending,
    /// Declined the invitation
    NotAttending,
}

impl GuestStatus {
    /// Get all statuses for iteration
    pub fn all() -> &'static [GuestStatus] {
        &[
            GuestStatus::Pending,
            GuestStatus::Attending,
            GuestStatus::NotAttending,
        ]
    }

    /// Label shown on status badges
    pub fn label(&self) -> &'static str {
        match self {
            GuestStatus::Pending => "Pending",
            GuestStatus::Attending => "Attending",
            GuestStatus::NotAttending => "Not Attending",
        }
    }
}

impl std::fmt::Display for GuestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GuestStatus::Pending => f.pad("pending"),
            GuestStatus::Attending => f.pad("attending"),
            GuestStatus::NotAttending => f.pad("not-attending"),
        }
    }
}

impl std::str::FromStr for GuestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(GuestStatus::Pending),
            "attending" => Ok(GuestStatus::Attending),
            "not-attending" | "not_attending" => Ok(GuestStatus::NotAttending),
            other => Err(format!("Unknown guest status: {}", other)),
        }
    }
}

/// An invited guest
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Guest {
    /// Unique identifier, also the last segment of the RSVP link
    pub id: String,
    /// Display name
    pub name: String,
    /// Contact address
    pub email: String,
    /// Current response
    #[serde(default)]
    pub status: GuestStatus,
    /// Additional people the guest brings (only counted when attending)
    #[serde(default)]
    pub guest_count: u32,
    /// Note left with the last response
    #[serde(default)]
    pub message: Option<String>,
    /// First time the guest responded
    #[serde(default)]
    pub responded_at: Option<DateTime<Utc>>,
    /// Last time the response changed
    #[serde(default)]
    pub last_modified: Option<DateTime<Utc>>,
}

impl Guest {
    /// Create a pending guest with no companions
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            status: GuestStatus::Pending,
            guest_count: 0,
            message: None,
            responded_at: None,
            last_modified: None,
        }
    }

    /// Builder method: set status
    pub fn status(mut self, status: GuestStatus) -> Self {
        self.status = status;
        self
    }

    /// Builder method: set the number of additional people
    pub fn guest_count(mut self, count: u32) -> Self {
        self.guest_count = count;
        self
    }

    /// People this guest contributes to the headcount.
    ///
    /// `guest_count` is ignored unless the guest is attending.
    pub fn headcount(&self) -> u32 {
        match self.status {
            GuestStatus::Attending => self.guest_count.saturating_add(1),
            _ => 0,
        }
    }
}

/// Aggregate tallies over the guest list
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GuestStats {
    pub total_guests: usize,
    pub attending: usize,
    pub not_attending: usize,
    pub pending: usize,
    /// Sum of headcounts over attending guests
    pub total_attendees: u32,
}
