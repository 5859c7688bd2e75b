//! Axum route handlers for the resume assistant.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::assistant::{cover_letter, optimize_resume};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct OptimizeRequest {
    pub resume_text: String,
    /// Overrides the configured default when present.
    pub temperature: Option<f32>,
}

#[derive(Debug, Deserialize)]
pub struct CoverLetterRequest {
    pub resume_text: String,
    pub jd_text: String,
}

#[derive(Debug, Serialize)]
pub struct GeneratedTextResponse {
    pub text: String,
}

/// POST /api/v1/assistant/optimize
pub async fn handle_optimize(
    State(state): State<AppState>,
    Json(request): Json<OptimizeRequest>,
) -> Result<Json<GeneratedTextResponse>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation("resume_text cannot be empty".to_string()));
    }

    let generator = state.generator()?;
    let temperature = request
        .temperature
        .unwrap_or(state.config.llm_temperature);
    let text = optimize_resume(generator.as_ref(), &request.resume_text, temperature).await?;

    Ok(Json(GeneratedTextResponse { text }))
}

/// POST /api/v1/assistant/cover-letter
pub async fn handle_cover_letter(
    State(state): State<AppState>,
    Json(request): Json<CoverLetterRequest>,
) -> Result<Json<GeneratedTextResponse>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation("resume_text cannot be empty".to_string()));
    }
    if request.jd_text.trim().is_empty() {
        return Err(AppError::Validation("jd_text cannot be empty".to_string()));
    }

    let generator = state.generator()?;
    let text = cover_letter(generator.as_ref(), &request.resume_text, &request.jd_text).await?;

    Ok(Json(GeneratedTextResponse { text }))
}
