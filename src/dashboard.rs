//! Admin Dashboard
//!
//! One dashboard, parameterized by [`DashboardConfig`]: the colour theme,
//! which per-guest link actions are offered, and whether the headline
//! total-attendees card is shown.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::guests::{Guest, GuestStats};
use crate::link::{generate_link, rsvp_path};

/// Colour theme for the dashboard
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Rose and purple
    #[default]
    Rose,
    /// Orange and red
    Saffron,
}

impl Theme {
    /// CSS class applied to the page body
    pub fn css_class(&self) -> &'static str {
        match self {
            Theme::Rose => "theme-rose",
            Theme::Saffron => "theme-saffron",
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rose" => Ok(Theme::Rose),
            "saffron" => Ok(Theme::Saffron),
            other => Err(format!("Unknown theme: {}", other)),
        }
    }
}

/// Per-guest action offered next to each RSVP link
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum LinkAction {
    /// Copy the link to the clipboard
    CopyLink,
    /// Open the link in a new tab
    OpenLink,
}

/// Dashboard presentation settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardConfig {
    #[serde(default)]
    pub theme: Theme,

    #[serde(default = "default_actions")]
    pub actions: BTreeSet<LinkAction>,

    #[serde(default = "default_show_total_card")]
    pub show_total_card: bool,
}

fn default_actions() -> BTreeSet<LinkAction> {
    [LinkAction::CopyLink, LinkAction::OpenLink].into_iter().collect()
}

fn default_show_total_card() -> bool {
    true
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            actions: default_actions(),
            show_total_card: default_show_total_card(),
        }
    }
}

impl DashboardConfig {
    pub fn allows(&self, action: LinkAction) -> bool {
        self.actions.contains(&action)
    }
}

/// One row of the guest list
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GuestRow {
    pub guest: Guest,
    /// Relative path shown under the guest's name
    pub path: String,
    /// Absolute link used by the copy/open actions
    pub link: String,
}

/// Everything the dashboard page displays
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardView {
    pub rows: Vec<GuestRow>,
    pub stats: GuestStats,
    pub copy_link: bool,
    pub open_link: bool,
    pub show_total_card: bool,
    pub theme: Theme,
}

impl DashboardView {
    pub fn build(
        config: &DashboardConfig,
        base_origin: &str,
        guests: Vec<Guest>,
        stats: GuestStats,
    ) -> Self {
        let rows = guests
            .into_iter()
            .map(|guest| GuestRow {
                path: rsvp_path(&guest.id),
                link: generate_link(base_origin, &guest.id),
                guest,
            })
            .collect();

        Self {
            rows,
            stats,
            copy_link: config.allows(LinkAction::CopyLink),
            open_link: config.allows(LinkAction::OpenLink),
            show_total_card: config.show_total_card,
            theme: config.theme,
        }
    }
}
