pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::auth::handlers as auth;
use crate::jobs::handlers as jobs;
use crate::resume::handlers as resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Session
        .route("/api/v1/auth/login", post(auth::handle_login))
        .route("/api/v1/auth/register", post(auth::handle_register))
        .route("/api/v1/auth/logout", post(auth::handle_logout))
        .route("/api/v1/auth/me", get(auth::handle_me))
        // Applications
        .route(
            "/api/v1/jobs",
            get(jobs::handle_list_jobs).post(jobs::handle_create_job),
        )
        .route(
            "/api/v1/jobs/:id",
            get(jobs::handle_get_job)
                .patch(jobs::handle_update_job)
                .delete(jobs::handle_delete_job),
        )
        .route("/api/v1/jobs/:id/move", post(jobs::handle_move_job))
        // Views
        .route("/api/v1/board", get(jobs::handle_board))
        .route("/api/v1/dashboard", get(jobs::handle_dashboard))
        .route(
            "/api/v1/view",
            get(jobs::handle_get_view).put(jobs::handle_set_view),
        )
        .route("/api/v1/analytics", get(jobs::handle_analytics))
        // Resume
        .route("/api/v1/resume/analyze", post(resume::handle_analyze))
        .with_state(state)
}
