//! # Wedding RSVP
//!
//! A small wedding website: a landing page, an admin dashboard for the
//! guest list and response tallies, and a personal RSVP form per guest.
//!
//! All state is in memory and resets on restart.
//!
//! ## Modules
//!
//! - [`guests`]: guest records, the registry and the shared directory
//! - [`rsvp`]: the RSVP form state machine
//! - [`link`]: shareable RSVP links
//! - [`ports`]: clipboard and notification capabilities
//! - [`dashboard`]: the parameterized admin view
//! - [`api`]: HTML pages and JSON API with Axum
//!
//! ## Quick Start
//!
//! ```rust
//! use wedding_rsvp::guests::GuestRegistry;
//! use wedding_rsvp::link::generate_link;
//! use wedding_rsvp::rsvp::{Attendance, RsvpForm};
//!
//! let mut registry = GuestRegistry::new();
//! let guest = registry.add_guest("Priya Shah", "priya@example.com").unwrap();
//!
//! let link = generate_link("https://example.com", &guest.id);
//! assert_eq!(link, "https://example.com/rsvp/1");
//!
//! let mut form = RsvpForm::new(guest.id.clone());
//! form.set_attending(Attendance::Yes);
//! form.set_guest_count(3);
//! let submission = form.submit().unwrap();
//!
//! registry.record_response(&submission).unwrap();
//! assert_eq!(registry.total_attendees(), 3);
//! ```

pub mod api;
pub mod config;
pub mod dashboard;
pub mod guests;
pub mod link;
pub mod ports;
pub mod rsvp;
pub mod wedding;

// Re-export top-level types for convenience
pub use guests::{
    Guest, GuestDirectory, GuestError, GuestRegistry, GuestStats, GuestStatus, InMemoryDirectory,
};

pub use rsvp::{Attendance, RsvpError, RsvpForm, RsvpPage, RsvpSubmission};

pub use link::generate_link;

pub use ports::{ClipboardPort, Notification, NotificationPort, Severity};

pub use dashboard::{DashboardConfig, LinkAction, Theme};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{Config, ConfigError, LoggingConfig, ServerConfig};
