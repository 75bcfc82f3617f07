//! Guest List
//!
//! - **types**: `Guest`, `GuestStatus`, `GuestStats`
//! - **registry**: ordered in-memory list with attendance tallies
//! - **directory**: async repository shared by the admin and RSVP pages
//! - **seed**: demo guests loaded at startup
//! - **error**: error types
//!
//! # Example
//!
//! ```rust
//! use wedding_rsvp::guests::{GuestRegistry, GuestStatus};
//!
//! let mut registry = GuestRegistry::new();
//! let guest = registry.add_guest("Asha Rao", "asha@example.com").unwrap();
//!
//! assert_eq!(guest.status, GuestStatus::Pending);
//! assert_eq!(registry.total_attendees(), 0);
//! ```

pub mod directory;
pub mod error;
pub mod registry;
pub mod seed;
pub mod types;

pub use directory::{GuestDirectory, InMemoryDirectory, StaticGuestTable};
pub use error::{GuestError, GuestResult};
pub use registry::{GuestLookup, GuestRegistry, IdGenerator, SequentialIds};
pub use seed::sample_guests;
pub use types::{Guest, GuestStats, GuestStatus};
