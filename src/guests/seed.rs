//! Demo guest list loaded at startup

use super::types::{Guest, GuestStatus};

/// The three sample invitees the site starts with
pub fn sample_guests() -> Vec<Guest> {
    vec![
        Guest::new("1", "Rajesh Patel", "rajesh@example.com"),
        Guest::new("2", "Priya Shah", "priya@example.com")
            .status(GuestStatus::Attending)
            .guest_count(3),
        Guest::new("3", "Amit Kumar", "amit@example.com").status(GuestStatus::NotAttending),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guests::GuestRegistry;

    #[test]
    fn test_sample_totals() {
        let registry = GuestRegistry::with_guests(sample_guests());
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.total_attendees(), 4);
    }
}
