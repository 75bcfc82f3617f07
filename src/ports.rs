//! Capability Ports
//!
//! Side effects the dashboard needs (clipboard writes, user
//! notifications) are injected through these traits so the guest list
//! logic never touches a browser or terminal directly.

use async_trait::async_trait;
use serde::Serialize;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::guests::Guest;
use crate::link::generate_link;

/// How prominently a notification should be shown
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Destructive,
}

/// A toast-style message for the user
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Info,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Destructive,
        }
    }

    /// Shown once a guest's RSVP link is on the clipboard
    pub fn link_copied(guest_name: &str) -> Self {
        Self::info(
            "Link Copied!",
            format!("RSVP link for {} has been copied to clipboard.", guest_name),
        )
    }

    /// Shown when the clipboard rejects a write
    pub fn copy_failed() -> Self {
        Self::destructive(
            "Copy Failed",
            "Please manually copy the link from the address bar.",
        )
    }
}

/// Clipboard write failed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Clipboard unavailable: {0}")]
pub struct ClipboardError(pub String);

/// Somewhere text can be copied to
#[async_trait]
pub trait ClipboardPort: Send + Sync {
    async fn copy(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Somewhere notifications are delivered
pub trait NotificationPort: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Clipboard held in process memory
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
    unavailable: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose every write fails
    pub fn unavailable() -> Self {
        Self {
            contents: Mutex::new(None),
            unavailable: true,
        }
    }

    /// Last copied text
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().ok().and_then(|c| c.clone())
    }
}

#[async_trait]
impl ClipboardPort for MemoryClipboard {
    async fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        if self.unavailable {
            return Err(ClipboardError("write permission denied".to_string()));
        }
        let mut contents = self
            .contents
            .lock()
            .map_err(|e| ClipboardError(e.to_string()))?;
        *contents = Some(text.to_string());
        Ok(())
    }
}

/// Collects notifications for rendering with the next page
#[derive(Debug, Default, Clone)]
pub struct FlashNotifier {
    pending: Arc<Mutex<Vec<Notification>>>,
}

impl FlashNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take all collected notifications
    pub fn drain(&self) -> Vec<Notification> {
        match self.pending.lock() {
            Ok(mut pending) => std::mem::take(&mut *pending),
            Err(_) => Vec::new(),
        }
    }
}

impl NotificationPort for FlashNotifier {
    fn notify(&self, notification: Notification) {
        tracing::debug!(
            title = %notification.title,
            severity = ?notification.severity,
            "Queued notification"
        );
        if let Ok(mut pending) = self.pending.lock() {
            pending.push(notification);
        }
    }
}

/// Copy a guest's RSVP link and tell the user how it went.
///
/// A failed copy is reported but changes nothing else.
pub async fn copy_rsvp_link(
    clipboard: &dyn ClipboardPort,
    notifier: &dyn NotificationPort,
    base_origin: &str,
    guest: &Guest,
) -> bool {
    let link = generate_link(base_origin, &guest.id);

    match clipboard.copy(&link).await {
        Ok(()) => {
            notifier.notify(Notification::link_copied(&guest.name));
            true
        }
        Err(e) => {
            tracing::warn!(guest_id = %guest.id, error = %e, "Failed to copy RSVP link");
            notifier.notify(Notification::copy_failed());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guest() -> Guest {
        Guest::new("2", "Priya Shah", "priya@example.com")
    }

    #[tokio::test]
    async fn test_copy_link_success() {
        let clipboard = MemoryClipboard::new();
        let notifier = FlashNotifier::new();

        let copied = copy_rsvp_link(&clipboard, &notifier, "https://example.com", &guest()).await;

        assert!(copied);
        assert_eq!(
            clipboard.contents().as_deref(),
            Some("https://example.com/rsvp/2")
        );
        let notes = notifier.drain();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0], Notification::link_copied("Priya Shah"));
        assert_eq!(notes[0].severity, Severity::Info);
    }

    #[tokio::test]
    async fn test_copy_link_failure_is_reported() {
        let clipboard = MemoryClipboard::unavailable();
        let notifier = FlashNotifier::new();

        let copied = copy_rsvp_link(&clipboard, &notifier, "https://example.com", &guest()).await;

        assert!(!copied);
        assert!(clipboard.contents().is_none());
        let notes = notifier.drain();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0], Notification::copy_failed());
        assert_eq!(notes[0].severity, Severity::Destructive);
    }

    #[test]
    fn test_flash_drain_empties() {
        let notifier = FlashNotifier::new();
        notifier.notify(Notification::info("a", "b"));
        assert_eq!(notifier.drain().len(), 1);
        assert!(notifier.drain().is_empty());
    }
}
