//! Data Transfer Objects
//!
//! Request and response types for the JSON API and the HTML form posts.

use serde::{Deserialize, Serialize};

use crate::guests::{Guest, GuestStatus};
use crate::link::{generate_link, rsvp_path};
use crate::rsvp::Attendance;

// ============================================
// GUEST DTOs
// ============================================

/// Add-guest request (JSON body or admin form)
#[derive(Debug, Default, Deserialize)]
pub struct CreateGuestRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Single guest response
#[derive(Debug, Serialize, Deserialize)]
pub struct GuestResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub status: GuestStatus,
    pub guest_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responded_at: Option<String>,
    /// Relative RSVP path
    pub rsvp_path: String,
    /// Absolute RSVP link
    pub rsvp_link: String,
}

impl GuestResponse {
    pub fn from_guest(guest: Guest, base_origin: &str) -> Self {
        Self {
            rsvp_path: rsvp_path(&guest.id),
            rsvp_link: generate_link(base_origin, &guest.id),
            responded_at: guest.responded_at.map(|t| t.to_rfc3339()),
            id: guest.id,
            name: guest.name,
            email: guest.email,
            status: guest.status,
            guest_count: guest.guest_count,
            message: guest.message,
        }
    }
}

/// Guest list response
#[derive(Debug, Serialize, Deserialize)]
pub struct GuestListResponse {
    pub total: usize,
    pub guests: Vec<GuestResponse>,
}

/// RSVP link response
#[derive(Debug, Serialize, Deserialize)]
pub struct LinkResponse {
    pub guest_id: String,
    pub link: String,
}

// ============================================
// RSVP DTOs
// ============================================

/// RSVP submitted through the JSON API
#[derive(Debug, Serialize, Deserialize)]
pub struct RecordResponseRequest {
    #[serde(default)]
    pub attending: Attendance,
    /// Party size including the respondent
    #[serde(default = "default_party_size")]
    pub guest_count: u8,
    #[serde(default)]
    pub message: String,
}

fn default_party_size() -> u8 {
    1
}

/// Raw RSVP form fields as posted by the browser
#[derive(Debug, Default, Deserialize)]
pub struct RsvpFormFields {
    #[serde(default)]
    pub attending: String,
    #[serde(default)]
    pub guest_count: String,
    #[serde(default)]
    pub message: String,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub guests: usize,
    pub uptime_seconds: u64,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guest_response_links() {
        let guest = Guest::new("5", "Asha", "asha@example.com");
        let response = GuestResponse::from_guest(guest, "https://example.com");

        assert_eq!(response.rsvp_path, "/rsvp/5");
        assert_eq!(response.rsvp_link, "https://example.com/rsvp/5");

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "pending");
        assert!(json.get("message").is_none());
    }

    #[test]
    fn test_record_response_defaults() {
        let req: RecordResponseRequest = serde_json::from_str(r#"{"attending": "no"}"#).unwrap();
        assert_eq!(req.attending, Attendance::No);
        assert_eq!(req.guest_count, 1);
        assert!(req.message.is_empty());
    }
}
