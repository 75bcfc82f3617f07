//! Application State
//!
//! Shared state accessible by all handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;

use crate::config::{Config, ServerConfig};
use crate::dashboard::DashboardConfig;
use crate::guests::{sample_guests, GuestDirectory, InMemoryDirectory};
use crate::wedding::WeddingDetails;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Guest directory read by both the dashboard and the RSVP pages
    pub directory: Arc<dyn GuestDirectory>,
    /// Server configuration
    pub server: Arc<ServerConfig>,
    /// Dashboard presentation settings
    pub dashboard: Arc<DashboardConfig>,
    /// Editable landing page content
    pub wedding: Arc<RwLock<WeddingDetails>>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState around an existing directory
    pub fn new(
        directory: Arc<dyn GuestDirectory>,
        server: ServerConfig,
        dashboard: DashboardConfig,
        wedding: WeddingDetails,
    ) -> Self {
        Self {
            directory,
            server: Arc::new(server),
            dashboard: Arc::new(dashboard),
            wedding: Arc::new(RwLock::new(wedding)),
            start_time: Instant::now(),
        }
    }

    /// Create AppState with an in-memory directory built from config
    pub fn from_config(config: &Config) -> Self {
        let directory = if config.guests.seed_sample {
            InMemoryDirectory::with_guests(sample_guests())
        } else {
            InMemoryDirectory::default()
        };

        Self::new(
            Arc::new(directory),
            config.server.clone(),
            config.dashboard.clone(),
            config.wedding.clone(),
        )
    }

    /// Origin used in shareable links
    pub fn public_origin(&self) -> &str {
        &self.server.public_origin
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
