//! Axum route handler for text export.

use axum::{
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::debug;

use crate::export::{paginate, render_plain, PageLayout};

const EXPORT_FILE_NAME: &str = "resume.txt";

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub text: String,
}

/// POST /api/v1/export/text
///
/// Returns the text wrapped and paginated as a downloadable attachment.
pub async fn handle_export_text(Json(request): Json<ExportRequest>) -> Response {
    let pages = paginate(&request.text, &PageLayout::default());
    debug!("Exporting {} page(s)", pages.len());

    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILE_NAME}\""),
            ),
        ],
        render_plain(&pages),
    )
        .into_response()
}
