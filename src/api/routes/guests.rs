//! Guest Routes
//!
//! JSON endpoints over the shared guest directory.
//!
//! - GET /api/v1/guests - List all guests
//! - POST /api/v1/guests - Add a guest
//! - GET /api/v1/guests/:id - Get a guest
//! - GET /api/v1/guests/:id/link - Get a guest's RSVP link
//! - POST /api/v1/guests/:id/response - Record an RSVP
//! - GET /api/v1/stats - Response tallies

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::api::dto::{
    CreateGuestRequest, GuestListResponse, GuestResponse, LinkResponse, RecordResponseRequest,
};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::guests::GuestStats;
use crate::link::generate_link;
use crate::rsvp::RsvpForm;

/// GET /api/v1/guests
///
/// List all guests in insertion order.
pub async fn list_guests(State(state): State<Arc<AppState>>) -> Json<GuestListResponse> {
    let guests: Vec<GuestResponse> = state
        .directory
        .list()
        .await
        .into_iter()
        .map(|g| GuestResponse::from_guest(g, state.public_origin()))
        .collect();

    Json(GuestListResponse {
        total: guests.len(),
        guests,
    })
}

/// POST /api/v1/guests
///
/// Add a pending guest. Name and email are required.
pub async fn create_guest(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateGuestRequest>,
) -> ApiResult<(StatusCode, Json<GuestResponse>)> {
    let guest = state.directory.add_guest(&req.name, &req.email).await?;

    Ok((
        StatusCode::CREATED,
        Json(GuestResponse::from_guest(guest, state.public_origin())),
    ))
}

/// GET /api/v1/guests/:id
pub async fn get_guest(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<GuestResponse>> {
    let guest = state.directory.find(&id).await?;
    Ok(Json(GuestResponse::from_guest(guest, state.public_origin())))
}

/// GET /api/v1/guests/:id/link
pub async fn guest_link(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<LinkResponse>> {
    let guest = state.directory.find(&id).await?;

    Ok(Json(LinkResponse {
        link: generate_link(state.public_origin(), &guest.id),
        guest_id: guest.id,
    }))
}

/// POST /api/v1/guests/:id/response
///
/// Runs the same validation as the RSVP page, then records the answer.
pub async fn record_response(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<RecordResponseRequest>,
) -> ApiResult<Json<GuestResponse>> {
    // Unknown guests are rejected before validation, as on the RSVP page.
    state.directory.find(&id).await?;

    let mut form = RsvpForm::new(id);
    form.set_attending(req.attending);
    form.set_guest_count(req.guest_count);
    form.set_message(req.message);

    let submission = form.submit()?;
    let guest = state.directory.record_response(&submission).await?;

    Ok(Json(GuestResponse::from_guest(guest, state.public_origin())))
}

/// GET /api/v1/stats
pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<GuestStats> {
    Json(state.directory.stats().await)
}
