//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    middleware,
    routing::{get, post, put},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::server::auth::SessionStore;
use crate::server::middleware::session_auth_middleware;
use crate::server::routes::{
    admin, auth, guides, health, messages, notifications, organizer, setup, stallholder,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub sessions: Arc<SessionStore>,
    pub setup_token: Option<String>,
}

/// Build the Axum application router
///
/// All routes share the session middleware; it populates request
/// extensions without blocking, and handlers enforce authorization.
pub fn build_app(
    pool: PgPool,
    sessions: Arc<SessionStore>,
    setup_token: Option<String>,
    allowed_origins: Vec<String>,
) -> Router {
    let app_state = AppState {
        db_pool: pool,
        sessions: sessions.clone(),
        setup_token,
    };

    // CORS: fall back to any origin when none are configured (development)
    let origin = if allowed_origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            allowed_origins
                .iter()
                .filter_map(|o| o.parse::<HeaderValue>().ok()),
        )
    };
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health::health_handler))
        // Auth
        .route("/auth/register", post(auth::register_handler))
        .route("/auth/login", post(auth::login_handler))
        .route("/auth/logout", post(auth::logout_handler))
        .route("/auth/me", get(auth::me_handler))
        // Bootstrap
        .route("/setup/admin", post(setup::setup_admin_handler))
        // Organizer
        .route(
            "/organizer/events",
            get(organizer::list_events_handler).post(organizer::create_event_handler),
        )
        .route(
            "/organizer/events/:id",
            get(organizer::get_event_handler).put(organizer::update_event_handler),
        )
        .route(
            "/organizer/events/:id/submit",
            post(organizer::submit_event_handler),
        )
        .route(
            "/organizer/events/:id/applications",
            get(organizer::list_applications_handler),
        )
        .route(
            "/organizer/applications/:id/approve",
            post(organizer::approve_application_handler),
        )
        .route(
            "/organizer/applications/:id/reject",
            post(organizer::reject_application_handler),
        )
        .route(
            "/organizer/reviews/:application_id",
            post(organizer::review_stallholder_handler),
        )
        // Stallholder
        .route("/stallholder/events", get(stallholder::search_events_handler))
        .route("/stallholder/events/:id", get(stallholder::get_event_handler))
        .route(
            "/stallholder/events/:id/apply",
            post(stallholder::apply_handler),
        )
        .route(
            "/stallholder/applications",
            get(stallholder::list_applications_handler),
        )
        .route(
            "/stallholder/applications/:id/cancel",
            post(stallholder::cancel_application_handler),
        )
        .route(
            "/stallholder/profile",
            get(stallholder::get_profile_handler).put(stallholder::update_profile_handler),
        )
        .route(
            "/stallholder/reviews/:application_id",
            post(stallholder::review_organizer_handler),
        )
        // Admin
        .route(
            "/admin/events/pending",
            get(admin::list_pending_events_handler),
        )
        .route(
            "/admin/events/:id/approve",
            post(admin::approve_event_handler),
        )
        .route("/admin/events/:id/reject", post(admin::reject_event_handler))
        .route(
            "/admin/profiles/pending",
            get(admin::list_pending_profiles_handler),
        )
        .route(
            "/admin/profiles/:id/approve",
            post(admin::approve_profile_handler),
        )
        .route(
            "/admin/profiles/:id/reject",
            post(admin::reject_profile_handler),
        )
        .route("/admin/reports", get(admin::list_reports_handler))
        .route(
            "/admin/reports/:id/status",
            post(admin::update_report_status_handler),
        )
        .route("/admin/notes", post(admin::create_note_handler))
        .route("/admin/guides", post(admin::create_guide_handler))
        .route(
            "/admin/guides/:id",
            put(admin::update_guide_handler).delete(admin::delete_guide_handler),
        )
        .route(
            "/admin/users/:id/active",
            post(admin::set_user_active_handler),
        )
        // Messages
        .route(
            "/messages/:application_id",
            get(messages::list_messages_handler).post(messages::send_message_handler),
        )
        // Notifications
        .route(
            "/notifications",
            get(notifications::list_notifications_handler),
        )
        .route(
            "/notifications/:id/read",
            post(notifications::mark_read_handler),
        )
        // Guides
        .route("/guides", get(guides::list_guides_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(middleware::from_fn_with_state(
            sessions,
            session_auth_middleware,
        ))
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
