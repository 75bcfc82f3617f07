//! Wedding details shown on the landing page
//!
//! Seeded from config and editable from the dashboard's content section.
//! Changes live in memory only.

use serde::{Deserialize, Serialize};

/// Public event information
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeddingDetails {
    #[serde(default)]
    pub bride: String,
    #[serde(default)]
    pub groom: String,
    /// Ceremony date, free text (e.g. "2026-12-12")
    #[serde(default)]
    pub date: String,
    /// Ceremony time, free text (e.g. "18:30")
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub venue: String,
}

/// Partial update; blank fields keep their current value
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeddingDetailsUpdate {
    #[serde(default)]
    pub bride: String,
    #[serde(default)]
    pub groom: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub venue: String,
}

impl WeddingDetails {
    /// Apply non-blank fields from an update
    pub fn apply(&mut self, update: WeddingDetailsUpdate) {
        fn set(field: &mut String, value: String) {
            let value = value.trim();
            if !value.is_empty() {
                *field = value.to_string();
            }
        }

        set(&mut self.bride, update.bride);
        set(&mut self.groom, update.groom);
        set(&mut self.date, update.date);
        set(&mut self.time, update.time);
        set(&mut self.venue, update.venue);
    }

    /// "Bride & Groom" line, or a placeholder until both are known
    pub fn couple(&self) -> String {
        match (self.bride.is_empty(), self.groom.is_empty()) {
            (false, false) => format!("{} & {}", self.bride, self.groom),
            (false, true) => self.bride.clone(),
            (true, false) => self.groom.clone(),
            (true, true) => "Names will be displayed here".to_string(),
        }
    }
}
