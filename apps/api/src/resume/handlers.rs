//! Axum route handlers for resume analysis.

use axum::Json;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::info;

use crate::resume::ats::ats_score;
use crate::resume::sections::{split_into_sections, SectionMap};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SectionsRequest {
    #[serde(default)]
    pub resume_text: String,
}

#[derive(Debug, Serialize)]
pub struct SectionsResponse {
    pub sections: SectionMap,
}

#[derive(Debug, Deserialize)]
pub struct AtsScoreRequest {
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub jd_text: String,
}

#[derive(Debug, Serialize)]
pub struct AtsScoreResponse {
    pub score: f64,
    pub keywords: BTreeMap<String, u8>,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resume/sections
///
/// Splits resume text into the fixed section set. Missing or empty text
/// yields every section empty.
pub async fn handle_sections(Json(request): Json<SectionsRequest>) -> Json<SectionsResponse> {
    let sections = split_into_sections(&request.resume_text);
    info!(
        "Sections extracted: {}",
        sections
            .populated()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    Json(SectionsResponse { sections })
}

/// POST /api/v1/resume/ats-score
///
/// Keyword overlap between the resume and the JD. An empty JD scores 0.
pub async fn handle_ats_score(Json(request): Json<AtsScoreRequest>) -> Json<AtsScoreResponse> {
    let result = ats_score(&request.resume_text, &request.jd_text);
    info!(
        "ATS score computed: {:.1}% over {} keywords",
        result.score,
        result.keywords.len()
    );

    let matched = result.matched().into_iter().map(String::from).collect();
    let missing = result.missing().into_iter().map(String::from).collect();

    Json(AtsScoreResponse {
        score: result.score,
        keywords: result.keywords,
        matched,
        missing,
    })
}
