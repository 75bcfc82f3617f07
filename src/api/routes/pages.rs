//! Page Routes
//!
//! Server-rendered HTML for the landing page, admin dashboard and RSVP form.
//!
//! - GET / - Landing page
//! - GET /admin - Admin dashboard
//! - POST /admin/guests - Add a guest from the dashboard form
//! - POST /admin/content - Update wedding details
//! - GET /rsvp/:guest_id - RSVP form
//! - POST /rsvp/:guest_id - Submit an RSVP
//! - POST /rsvp/:guest_id/revise - Reopen a submitted RSVP for editing
//!
//! RSVP forms keep no server-side session: each post carries the field
//! values and the form is rebuilt from them.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Form,
};
use maud::Markup;
use std::sync::Arc;

use crate::api::dto::{CreateGuestRequest, RsvpFormFields};
use crate::api::state::AppState;
use crate::api::views;
use crate::dashboard::DashboardView;
use crate::guests::GuestError;
use crate::ports::{FlashNotifier, Notification, NotificationPort};
use crate::rsvp::{RsvpForm, RsvpPage};
use crate::wedding::WeddingDetailsUpdate;

/// GET /
pub async fn landing(State(state): State<Arc<AppState>>) -> Markup {
    let details = state.wedding.read().await.clone();
    views::landing(state.dashboard.theme, &details)
}

/// GET /admin
pub async fn admin_dashboard(State(state): State<Arc<AppState>>) -> Markup {
    render_dashboard(&state, &FlashNotifier::new()).await
}

/// POST /admin/guests
pub async fn admin_add_guest(
    State(state): State<Arc<AppState>>,
    Form(req): Form<CreateGuestRequest>,
) -> Markup {
    let notifier = FlashNotifier::new();

    match state.directory.add_guest(&req.name, &req.email).await {
        Ok(guest) => notifier.notify(Notification::info(
            "Guest Added Successfully!",
            format!("{} has been added to the guest list.", guest.name),
        )),
        Err(GuestError::Validation(_)) => notifier.notify(Notification::destructive(
            "Missing Guest Details",
            "Please enter both a name and an email address.",
        )),
        Err(e) => notifier.notify(Notification::destructive("Could Not Add Guest", e.to_string())),
    }

    render_dashboard(&state, &notifier).await
}

/// POST /admin/content
pub async fn admin_update_content(
    State(state): State<Arc<AppState>>,
    Form(update): Form<WeddingDetailsUpdate>,
) -> Markup {
    state.wedding.write().await.apply(update);
    tracing::info!("Updated wedding details");

    let notifier = FlashNotifier::new();
    notifier.notify(Notification::info(
        "Changes Saved",
        "The website content has been updated.",
    ));

    render_dashboard(&state, &notifier).await
}

async fn render_dashboard(state: &AppState, notifier: &FlashNotifier) -> Markup {
    let guests = state.directory.list().await;
    let stats = state.directory.stats().await;
    let view = DashboardView::build(&state.dashboard, state.public_origin(), guests, stats);
    let details = state.wedding.read().await.clone();

    views::dashboard(&view, &details, &notifier.drain())
}

/// Resolve the page for a guest id against the shared directory
async fn load_page(state: &AppState, guest_id: &str) -> RsvpPage {
    RsvpPage::resolve(guest_id, state.directory.find(guest_id).await.ok())
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, views::guest_not_found()).into_response()
}

/// GET /rsvp/:guest_id
pub async fn rsvp_page(
    State(state): State<Arc<AppState>>,
    Path(guest_id): Path<String>,
) -> Response {
    match load_page(&state, &guest_id).await {
        RsvpPage::Form { guest, form } => views::rsvp_form(&guest, &form, &[]).into_response(),
        RsvpPage::NotFound { guest_id } => {
            tracing::debug!(guest_id = %guest_id, "RSVP link for unknown guest");
            not_found()
        }
    }
}

/// POST /rsvp/:guest_id
pub async fn rsvp_submit(
    State(state): State<Arc<AppState>>,
    Path(guest_id): Path<String>,
    Form(fields): Form<RsvpFormFields>,
) -> Response {
    let guest = match load_page(&state, &guest_id).await {
        RsvpPage::Form { guest, .. } => guest,
        RsvpPage::NotFound { .. } => return not_found(),
    };

    let notifier = FlashNotifier::new();
    let mut form = RsvpForm::from_input(
        guest.id.clone(),
        &fields.attending,
        &fields.guest_count,
        &fields.message,
    );

    let submission = match form.submit() {
        Ok(submission) => submission,
        Err(_) => {
            notifier.notify(Notification::destructive(
                "Please select your attendance",
                "Let us know if you'll be joining us for the celebration.",
            ));
            return views::rsvp_form(&guest, &form, &notifier.drain()).into_response();
        }
    };

    tracing::info!(
        guest_id = %submission.guest_id,
        attending = submission.attending.as_str(),
        guest_count = submission.guest_count,
        "RSVP submitted"
    );

    if let Err(e) = state.directory.record_response(&submission).await {
        tracing::warn!(guest_id = %guest.id, error = %e, "Failed to record RSVP");
        return not_found();
    }

    notifier.notify(Notification::info(
        "RSVP Submitted Successfully!",
        "Thank you for your response. We can't wait to celebrate with you!",
    ));

    views::rsvp_submitted(&guest, &form, &notifier.drain()).into_response()
}

/// POST /rsvp/:guest_id/revise
pub async fn rsvp_revise(
    State(state): State<Arc<AppState>>,
    Path(guest_id): Path<String>,
    Form(fields): Form<RsvpFormFields>,
) -> Response {
    let guest = match load_page(&state, &guest_id).await {
        RsvpPage::Form { guest, .. } => guest,
        RsvpPage::NotFound { .. } => return not_found(),
    };

    let mut form = RsvpForm::from_submitted_input(
        guest.id.clone(),
        &fields.attending,
        &fields.guest_count,
        &fields.message,
    );
    form.revise_again();

    views::rsvp_form(&guest, &form, &[]).into_response()
}
