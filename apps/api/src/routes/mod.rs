pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::assistant::handlers as assistant;
use crate::export::handlers as export;
use crate::resume::handlers as resume;
use crate::state::AppState;
use crate::upload::handlers as upload;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Resume analysis
        .route("/api/v1/resume/sections", post(resume::handle_sections))
        .route("/api/v1/resume/ats-score", post(resume::handle_ats_score))
        .route("/api/v1/resume/upload", post(upload::handle_upload))
        // Assistant (LLM-backed)
        .route(
            "/api/v1/assistant/optimize",
            post(assistant::handle_optimize),
        )
        .route(
            "/api/v1/assistant/cover-letter",
            post(assistant::handle_cover_letter),
        )
        // Export
        .route("/api/v1/export/text", post(export::handle_export_text))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
