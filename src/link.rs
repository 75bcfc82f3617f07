//! Shareable RSVP links

/// Path of a guest's RSVP page relative to the site root
pub fn rsvp_path(guest_id: &str) -> String {
    format!("/rsvp/{}", guest_id)
}

/// Absolute RSVP link for a guest.
///
/// A trailing slash on `base_origin` is dropped. An empty `guest_id`
/// yields a link ending in `/rsvp/`, which simply resolves to no guest.
pub fn generate_link(base_origin: &str, guest_id: &str) -> String {
    format!("{}{}", base_origin.trim_end_matches('/'), rsvp_path(guest_id))
}
