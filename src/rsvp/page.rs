//! RSVP page resolution
//!
//! A page view either finds its guest and owns a fresh form, or lands in
//! the terminal `NotFound` state. There is no retry from `NotFound`.

use super::form::RsvpForm;
use crate::guests::{Guest, GuestLookup};

/// What an `/rsvp/:guest_id` view shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RsvpPage {
    NotFound { guest_id: String },
    Form { guest: GuestSummary, form: RsvpForm },
}

/// Guest fields the RSVP page needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestSummary {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<Guest> for GuestSummary {
    fn from(guest: Guest) -> Self {
        Self {
            id: guest.id,
            name: guest.name,
            email: guest.email,
        }
    }
}

impl RsvpPage {
    /// Resolve a page from any lookup source
    pub fn load(lookup: &impl GuestLookup, guest_id: &str) -> Self {
        Self::resolve(guest_id, lookup.find_guest(guest_id))
    }

    /// Build the page from an already-performed lookup
    pub fn resolve(guest_id: &str, guest: Option<Guest>) -> Self {
        match guest {
            Some(guest) => {
                let form = RsvpForm::new(guest.id.clone());
                RsvpPage::Form {
                    guest: guest.into(),
                    form,
                }
            }
            None => RsvpPage::NotFound {
                guest_id: guest_id.to_string(),
            },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RsvpPage::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guests::{sample_guests, GuestRegistry, StaticGuestTable};

    #[test]
    fn test_known_guest_gets_fresh_form() {
        let table = StaticGuestTable::new(sample_guests());
        match RsvpPage::load(&table, "2") {
            RsvpPage::Form { guest, form } => {
                assert_eq!(guest.name, "Priya Shah");
                assert_eq!(form.guest_id(), "2");
                assert!(!form.is_submitted());
            }
            other => panic!("expected form, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_id_is_not_found_even_if_registry_has_it() {
        let table = StaticGuestTable::new(sample_guests());
        let mut registry = GuestRegistry::with_guests(sample_guests());
        let added = registry.add_guest("New Guest", "new@example.com").unwrap();

        assert!(!RsvpPage::load(&registry, &added.id).is_not_found());
        assert_eq!(
            RsvpPage::load(&table, &added.id),
            RsvpPage::NotFound {
                guest_id: added.id.clone()
            }
        );
    }
}
