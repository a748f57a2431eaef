pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::interview::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Interview API
        .route("/api/v1/session", get(handlers::handle_get_session))
        .route(
            "/api/v1/session/resume",
            post(handlers::handle_upload_resume).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/api/v1/session/confirm", post(handlers::handle_confirm_info))
        .route("/api/v1/session/answer", post(handlers::handle_submit_answer))
        .route("/api/v1/session/reset", post(handlers::handle_reset))
        .with_state(state)
}
