//! Shared Guest Directory
//!
//! Single source of truth read by both the admin dashboard and the RSVP
//! form. The in-memory implementation wraps a [`GuestRegistry`] in an
//! async lock so concurrent requests see a consistent list.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::error::{GuestError, GuestResult};
use super::registry::{GuestLookup, GuestRegistry};
use super::types::{Guest, GuestStats};
use crate::rsvp::RsvpSubmission;

/// Repository of guests shared by every page
#[async_trait]
pub trait GuestDirectory: Send + Sync {
    /// All guests in insertion order
    async fn list(&self) -> Vec<Guest>;

    /// Look up one guest
    async fn find(&self, id: &str) -> GuestResult<Guest>;

    /// Add a pending guest
    async fn add_guest(&self, name: &str, email: &str) -> GuestResult<Guest>;

    /// Store a submitted RSVP against its guest
    async fn record_response(&self, submission: &RsvpSubmission) -> GuestResult<Guest>;

    /// Aggregate tallies
    async fn stats(&self) -> GuestStats;
}

/// Directory held entirely in memory; resets on restart
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    registry: RwLock<GuestRegistry>,
}

impl InMemoryDirectory {
    pub fn new(registry: GuestRegistry) -> Self {
        Self {
            registry: RwLock::new(registry),
        }
    }

    /// Directory pre-populated with the given guests
    pub fn with_guests(guests: Vec<Guest>) -> Self {
        Self::new(GuestRegistry::with_guests(guests))
    }
}

#[async_trait]
impl GuestDirectory for InMemoryDirectory {
    async fn list(&self) -> Vec<Guest> {
        self.registry.read().await.guests().to_vec()
    }

    async fn find(&self, id: &str) -> GuestResult<Guest> {
        self.registry
            .read()
            .await
            .find_guest(id)
            .ok_or_else(|| GuestError::NotFound(id.to_string()))
    }

    async fn add_guest(&self, name: &str, email: &str) -> GuestResult<Guest> {
        let guest = self.registry.write().await.add_guest(name, email)?;
        tracing::info!(guest_id = %guest.id, guest_name = %guest.name, "Added guest");
        Ok(guest)
    }

    async fn record_response(&self, submission: &RsvpSubmission) -> GuestResult<Guest> {
        let guest = self.registry.write().await.record_response(submission)?;
        tracing::info!(
            guest_id = %guest.id,
            status = %guest.status,
            guest_count = guest.guest_count,
            "Recorded RSVP response"
        );
        Ok(guest)
    }

    async fn stats(&self) -> GuestStats {
        self.registry.read().await.stats()
    }
}

/// Fixed id → guest table, independent of any registry
#[derive(Debug, Clone, Default)]
pub struct StaticGuestTable {
    guests: HashMap<String, Guest>,
}

impl StaticGuestTable {
    pub fn new(guests: impl IntoIterator<Item = Guest>) -> Self {
        Self {
            guests: guests.into_iter().map(|g| (g.id.clone(), g)).collect(),
        }
    }
}

impl GuestLookup for StaticGuestTable {
    fn find_guest(&self, id: &str) -> Option<Guest> {
        self.guests.get(id).cloned()
    }
}
