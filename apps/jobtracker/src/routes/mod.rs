pub mod ai;
pub mod auth;
pub mod health;
pub mod jobs;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Auth
        .route("/api/auth/login", post(auth::handle_login))
        .route("/api/auth/signup", post(auth::handle_signup))
        .route("/api/auth/verify", get(auth::handle_verify))
        // Jobs
        .route(
            "/api/jobs",
            get(jobs::handle_list_jobs).post(jobs::handle_create_job),
        )
        .route(
            "/api/jobs/:id",
            put(jobs::handle_update_job).delete(jobs::handle_delete_job),
        )
        // AI helpers
        .route("/api/ai/resume", post(ai::handle_resume))
        .route("/api/ai/prep", post(ai::handle_prep))
        .with_state(state)
}
