use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::{get, patch, post, put},
    Router,
};

use crate::config::Config;
use crate::middleware::{auth, rate_limit};
use crate::AppState;

pub mod applications;
pub mod candidates;
pub mod health;
pub mod interviews;
pub mod jobs;
pub mod messages;
pub mod notifications;
pub mod profile;

/// Assembles the public and authenticated route groups. Rate limits apply
/// per group; the bearer-auth layer guards every authenticated route.
pub fn router(config: &Config) -> Router<AppState> {
    let public_api = Router::new()
        .route("/health", get(health::health))
        .route("/jobs", get(jobs::list_jobs))
        .route("/jobs/:id", get(jobs::get_job))
        .layer(from_fn_with_state(
            rate_limit::new_rps_state(config.public_rps),
            rate_limit::rps_middleware,
        ));

    let authed_api = Router::new()
        .route("/jobs", post(jobs::create_job))
        .route("/employer/jobs", get(jobs::list_my_jobs))
        .route("/jobs/:id/applications", get(applications::list_for_job))
        .route("/applications", get(applications::list_applications))
        .route("/applications/:id", get(applications::get_application))
        .route("/applications/:id/apply", post(applications::apply))
        .route(
            "/applications/:id/status",
            patch(applications::update_status),
        )
        .route("/applications/:id/withdraw", post(applications::withdraw))
        .route("/applications/:id/interviews", post(interviews::schedule))
        .route(
            "/interviews/:id",
            put(interviews::reschedule).delete(interviews::cancel),
        )
        .route("/interviews/:id/respond", post(interviews::respond))
        .route("/notifications/latest", get(notifications::latest))
        .route(
            "/notifications/:id/mark-as-read",
            post(notifications::mark_read),
        )
        .route(
            "/notifications/mark-all-read",
            post(notifications::mark_all_read),
        )
        .route("/candidates/search", get(candidates::search_candidates))
        .route("/api/messages", post(messages::send_message))
        .route("/api/messages/unread-count", get(messages::unread_count))
        .route("/api/messages/:peer", get(messages::conversation))
        .route(
            "/api/messages/:peer/read",
            post(messages::mark_conversation_read),
        )
        .route("/profile", get(profile::own_profile))
        .route("/profile/seeker", put(profile::upsert_seeker_profile))
        .route("/profile/employer", put(profile::upsert_employer_profile))
        .route_layer(from_fn(auth::require_bearer_auth))
        .layer(from_fn_with_state(
            rate_limit::new_rps_state(config.api_rps),
            rate_limit::rps_middleware,
        ));

    public_api.merge(authed_api)
}
