//! Guest Registry
//!
//! Ordered in-memory list of guests. Guests are only ever appended; the
//! only mutation of an existing entry is recording an RSVP response.

use chrono::{DateTime, Utc};

use super::error::{GuestError, GuestResult};
use super::types::{Guest, GuestStats, GuestStatus};
use crate::rsvp::{Attendance, RsvpSubmission};

/// Source of new guest identifiers
pub trait IdGenerator: Send + Sync {
    /// Produce the next candidate id
    fn next_id(&mut self) -> String;
}

/// Monotonically increasing numeric ids ("1", "2", ...)
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    /// Start counting at `first`
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }

    /// Start after the highest numeric id among `guests`
    pub fn after(guests: &[Guest]) -> Self {
        let max = guests
            .iter()
            .filter_map(|g| g.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self::starting_at(max.saturating_add(1))
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = self.next;
        self.next = self.next.wrapping_add(1);
        id.to_string()
    }
}

/// Read-only guest lookup by id
pub trait GuestLookup {
    fn find_guest(&self, id: &str) -> Option<Guest>;
}

/// In-memory guest list
pub struct GuestRegistry {
    guests: Vec<Guest>,
    ids: Box<dyn IdGenerator>,
}

impl GuestRegistry {
    /// Create an empty registry with sequential ids starting at 1
    pub fn new() -> Self {
        Self::with_ids(Vec::new(), SequentialIds::default())
    }

    /// Create a registry from existing guests, continuing their numbering
    pub fn with_guests(guests: Vec<Guest>) -> Self {
        let ids = SequentialIds::after(&guests);
        Self::with_ids(guests, ids)
    }

    /// Create a registry with an injected id generator
    pub fn with_ids(guests: Vec<Guest>, ids: impl IdGenerator + 'static) -> Self {
        Self {
            guests,
            ids: Box::new(ids),
        }
    }

    /// Append a new pending guest.
    ///
    /// Empty `name` or `email` leaves the registry unchanged.
    pub fn add_guest(&mut self, name: &str, email: &str) -> GuestResult<Guest> {
        if name.trim().is_empty() {
            return Err(GuestError::Validation("guest name is required".to_string()));
        }
        if email.trim().is_empty() {
            return Err(GuestError::Validation("guest email is required".to_string()));
        }

        let id = self.unused_id();
        let guest = Guest::new(id, name, email);
        self.guests.push(guest.clone());
        Ok(guest)
    }

    fn unused_id(&mut self) -> String {
        loop {
            let candidate = self.ids.next_id();
            if !self.guests.iter().any(|g| g.id == candidate) {
                return candidate;
            }
        }
    }

    /// Get all guests in insertion order
    pub fn guests(&self) -> &[Guest] {
        &self.guests
    }

    pub fn len(&self) -> usize {
        self.guests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guests.is_empty()
    }

    /// Get guest by id
    pub fn find(&self, id: &str) -> Option<&Guest> {
        self.guests.iter().find(|g| g.id == id)
    }

    /// Total people attending, including companions
    pub fn total_attendees(&self) -> u32 {
        self.guests
            .iter()
            .map(Guest::headcount)
            .fold(0, u32::saturating_add)
    }

    /// Number of guests with the given status
    pub fn count_by_status(&self, status: GuestStatus) -> usize {
        self.guests.iter().filter(|g| g.status == status).count()
    }

    /// Dashboard tallies
    pub fn stats(&self) -> GuestStats {
        GuestStats {
            total_guests: self.len(),
            attending: self.count_by_status(GuestStatus::Attending),
            not_attending: self.count_by_status(GuestStatus::NotAttending),
            pending: self.count_by_status(GuestStatus::Pending),
            total_attendees: self.total_attendees(),
        }
    }

    /// Apply a submitted RSVP to the guest it belongs to
    pub fn record_response(&mut self, submission: &RsvpSubmission) -> GuestResult<Guest> {
        self.record_response_at(submission, Utc::now())
    }

    /// Apply a submitted RSVP with an explicit timestamp
    pub fn record_response_at(
        &mut self,
        submission: &RsvpSubmission,
        now: DateTime<Utc>,
    ) -> GuestResult<Guest> {
        let guest = self
            .guests
            .iter_mut()
            .find(|g| g.id == submission.guest_id)
            .ok_or_else(|| GuestError::NotFound(submission.guest_id.clone()))?;

        match submission.attending {
            Attendance::Yes => {
                guest.status = GuestStatus::Attending;
                // The form counts the respondent, the registry counts companions.
                guest.guest_count = u32::from(submission.guest_count).saturating_sub(1);
            }
            Attendance::No => {
                guest.status = GuestStatus::NotAttending;
                guest.guest_count = 0;
            }
            Attendance::Unanswered => {
                return Err(GuestError::Validation(
                    "attendance not selected".to_string(),
                ));
            }
        }

        let message = submission.message.trim();
        guest.message = if message.is_empty() {
            None
        } else {
            Some(message.to_string())
        };
        guest.responded_at.get_or_insert(now);
        guest.last_modified = Some(now);

        Ok(guest.clone())
    }
}

impl Default for GuestRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GuestRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GuestRegistry")
            .field("guests", &self.guests)
            .finish_non_exhaustive()
    }
}

impl GuestLookup for GuestRegistry {
    fn find_guest(&self, id: &str) -> Option<Guest> {
        self.find(id).cloned()
    }
}
