//! Wedding RSVP HTTP layer
//!
//! HTML pages and a JSON API, built with Axum.
//!
//! # Pages
//! - `GET /` - Landing page
//! - `GET /admin` - Admin dashboard
//! - `POST /admin/guests` - Add a guest
//! - `POST /admin/content` - Update wedding details
//! - `GET /rsvp/:guest_id` - RSVP form
//! - `POST /rsvp/:guest_id` - Submit an RSVP
//! - `POST /rsvp/:guest_id/revise` - Edit a submitted RSVP
//!
//! # JSON API
//! - `GET /api/v1/guests` - List all guests
//! - `POST /api/v1/guests` - Add a guest
//! - `GET /api/v1/guests/:id` - Get a guest
//! - `GET /api/v1/guests/:id/link` - Get a guest's RSVP link
//! - `POST /api/v1/guests/:id/response` - Record an RSVP
//! - `GET /api/v1/stats` - Response tallies
//!
//! # Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,no_run
//! use wedding_rsvp::api::{serve, AppState};
//! use wedding_rsvp::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let state = AppState::from_config(&config);
//!     serve(state, &config.server).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;
pub mod views;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let page_routes = Router::new()
        .route("/", get(routes::pages::landing))
        .route("/admin", get(routes::pages::admin_dashboard))
        .route("/admin/guests", post(routes::pages::admin_add_guest))
        .route("/admin/content", post(routes::pages::admin_update_content))
        .route(
            "/rsvp/:guest_id",
            get(routes::pages::rsvp_page).post(routes::pages::rsvp_submit),
        )
        .route("/rsvp/:guest_id/revise", post(routes::pages::rsvp_revise));

    let api_routes = Router::new()
        .route(
            "/guests",
            get(routes::guests::list_guests).post(routes::guests::create_guest),
        )
        .route("/guests/:id", get(routes::guests::get_guest))
        .route("/guests/:id/link", get(routes::guests::guest_link))
        .route("/guests/:id/response", post(routes::guests::record_response))
        .route("/stats", get(routes::guests::get_stats));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/", get(routes::health::full_health));

    let shared_state = Arc::new(state);

    Router::new()
        .merge(page_routes)
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state)
}

/// Start the HTTP server
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Wedding RSVP listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Wedding RSVP shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::dto::{GuestListResponse, GuestResponse, LinkResponse};
    use crate::config::Config;
    use crate::guests::{GuestStats, GuestStatus};
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        response::Response,
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let mut config = Config::default();
        config.server.public_origin = "https://example.com".to_string();
        build_router(AppState::from_config(&config))
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn post_form(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_string(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let response = create_test_app().oneshot(get("/health/live")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let response = create_test_app().oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["guests"], 3);
    }

    #[tokio::test]
    async fn test_list_seeded_guests() {
        let response = create_test_app().oneshot(get("/api/v1/guests")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let list: GuestListResponse = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(list.total, 3);
        assert_eq!(list.guests[1].name, "Priya Shah");
        assert_eq!(list.guests[1].rsvp_link, "https://example.com/rsvp/2");
    }

    #[tokio::test]
    async fn test_create_guest() {
        let app = create_test_app();

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/v1/guests",
                r#"{"name": "Asha Rao", "email": "asha@example.com"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let guest: GuestResponse = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(guest.id, "4");
        assert_eq!(guest.status, GuestStatus::Pending);

        let response = app.oneshot(get("/api/v1/guests/4")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_create_guest_missing_email() {
        let response = create_test_app()
            .oneshot(post_json("/api/v1/guests", r#"{"name": "Asha Rao", "email": ""}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_guest_invalid_json() {
        let response = create_test_app()
            .oneshot(post_json("/api/v1/guests", "not json"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_unknown_guest() {
        let response = create_test_app()
            .oneshot(get("/api/v1/guests/99"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_guest_link() {
        let response = create_test_app()
            .oneshot(get("/api/v1/guests/1/link"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let link: LinkResponse = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(link.link, "https://example.com/rsvp/1");
    }

    #[tokio::test]
    async fn test_record_response_updates_stats() {
        let app = create_test_app();

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/v1/guests/1/response",
                r#"{"attending": "yes", "guest_count": 2}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.oneshot(get("/api/v1/stats")).await.unwrap();
        let stats: GuestStats = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(stats.attending, 2);
        assert_eq!(stats.pending, 0);
        assert_eq!(stats.total_attendees, 6);
    }

    #[tokio::test]
    async fn test_record_response_requires_attendance() {
        let response = create_test_app()
            .oneshot(post_json("/api/v1/guests/1/response", r#"{"guest_count": 2}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_landing_page() {
        let response = create_test_app().oneshot(get("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.contains("Enter Admin Dashboard"));
    }

    #[tokio::test]
    async fn test_admin_dashboard() {
        let response = create_test_app().oneshot(get("/admin")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_string(response).await;
        assert!(html.contains("Guest List (3 guests)"));
        assert!(html.contains("Total expected guests: 4"));
    }

    #[tokio::test]
    async fn test_admin_add_guest_form() {
        let app = create_test_app();

        let response = app
            .clone()
            .oneshot(post_form("/admin/guests", "name=Asha+Rao&email=asha%40example.com"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_string(response).await;
        assert!(html.contains("Guest Added Successfully!"));
        assert!(html.contains("Guest List (4 guests)"));

        let response = app
            .oneshot(post_form("/admin/guests", "name=&email=x%40example.com"))
            .await
            .unwrap();
        let html = body_string(response).await;
        assert!(html.contains("Missing Guest Details"));
        assert!(html.contains("Guest List (4 guests)"));
    }

    #[tokio::test]
    async fn test_admin_update_content() {
        let app = create_test_app();

        let response = app
            .clone()
            .oneshot(post_form("/admin/content", "bride=Meera&groom=Arjun&venue=Jaipur"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_string(app.oneshot(get("/")).await.unwrap()).await;
        assert!(html.contains("Meera &amp; Arjun"));
        assert!(html.contains("Jaipur"));
    }

    #[tokio::test]
    async fn test_rsvp_unknown_guest_is_not_found() {
        let response = create_test_app().oneshot(get("/rsvp/99")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_string(response).await.contains("Guest Not Found"));
    }

    #[tokio::test]
    async fn test_rsvp_page_for_guest_added_on_dashboard() {
        let app = create_test_app();
        app.clone()
            .oneshot(post_form("/admin/guests", "name=Asha&email=asha%40example.com"))
            .await
            .unwrap();

        let response = app.oneshot(get("/rsvp/4")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.contains("Namaste, Asha!"));
    }

    #[tokio::test]
    async fn test_rsvp_submit_without_attendance() {
        let response = create_test_app()
            .oneshot(post_form("/rsvp/1", "message=hello"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_string(response).await;
        assert!(html.contains("Please select your attendance"));
        assert!(html.contains("Submit RSVP"));
        assert!(html.contains("hello"));
    }

    #[tokio::test]
    async fn test_rsvp_submit_and_revise() {
        let app = create_test_app();

        let response = app
            .clone()
            .oneshot(post_form("/rsvp/1", "attending=yes&guest_count=3&message=Yay"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("Thank You!"));
        assert!(html.contains("Update RSVP"));

        let response = app.clone().oneshot(get("/api/v1/stats")).await.unwrap();
        let stats: GuestStats = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(stats.total_attendees, 7);

        let response = app
            .oneshot(post_form("/rsvp/1/revise", "attending=yes&guest_count=3&message=Yay"))
            .await
            .unwrap();
        let html = body_string(response).await;
        assert!(html.contains("Submit RSVP"));
        assert!(html.contains(r#"name="guest_count" value="3""#));
        assert!(html.contains(r#"value="yes" checked"#));
    }

    #[tokio::test]
    async fn test_rsvp_page_offers_party_size() {
        let response = create_test_app().oneshot(get("/rsvp/1")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_string(response).await;
        assert!(html.contains(r#"<input type="number" name="guest_count" value="1" min="1" max="5">"#));
        assert!(!html.contains(r#"type="hidden" name="guest_count""#));
        assert!(html.contains(r#"document.getElementById('party-size').hidden"#));
    }

    #[tokio::test]
    async fn test_rsvp_submit_fields_from_rendered_form() {
        let app = create_test_app();

        let html = body_string(app.clone().oneshot(get("/rsvp/1")).await.unwrap()).await;
        assert!(html.contains(r#"<form method="post" action="/rsvp/1">"#));
        assert!(html.contains(r#"type="radio" name="attending" value="yes""#));
        assert!(html.contains(r#"type="number" name="guest_count""#));
        assert!(html.contains(r#"textarea name="message""#));

        // Guest ticks "yes" and enters a party of three.
        let response = app
            .clone()
            .oneshot(post_form("/rsvp/1", "attending=yes&guest_count=3&message="))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.contains("Thank You!"));

        let response = app.oneshot(get("/api/v1/guests/1")).await.unwrap();
        let guest: GuestResponse = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(guest.status, GuestStatus::Attending);
        assert_eq!(guest.guest_count, 2);
    }

    #[tokio::test]
    async fn test_rsvp_revise_keeps_declined_answer() {
        let response = create_test_app()
            .oneshot(post_form("/rsvp/1/revise", "attending=no&guest_count=0&message=Sorry"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_string(response).await;
        assert!(html.contains("Submit RSVP"));
        assert!(html.contains(r#"value="no" checked"#));
        assert!(html.contains(r#"<div id="party-size" hidden>"#));
        assert!(html.contains("Sorry"));
    }

    #[tokio::test]
    async fn test_rsvp_submit_unknown_guest() {
        let response = create_test_app()
            .oneshot(post_form("/rsvp/99", "attending=no"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
