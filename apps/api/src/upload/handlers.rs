//! Axum route handler for resume uploads.

use axum::{extract::Multipart, Json};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::resume::sections::{split_into_sections, SectionMap};
use crate::upload::{extract_text, FileKind};

/// Multipart field carrying the resume file.
const RESUME_FIELD: &str = "resume";
const FALLBACK_FILE_NAME: &str = "resume.txt";

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub file_name: String,
    pub kind: FileKind,
    pub text: String,
    pub sections: SectionMap,
}

/// POST /api/v1/resume/upload
///
/// Decodes the `resume` multipart field (PDF, DOCX or text) and returns the
/// extracted text together with its section split.
pub async fn handle_upload(mut multipart: Multipart) -> Result<Json<UploadResponse>, AppError> {
    let (file_name, data) = read_resume_field(&mut multipart).await?;
    let kind = FileKind::from_file_name(&file_name);
    info!("Decoding upload '{}' ({:?}, {} bytes)", file_name, kind, data.len());

    let name = file_name.clone();
    let text = tokio::task::spawn_blocking(move || extract_text(&name, &data))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("upload decoder crashed: {e}")))??;

    let sections = split_into_sections(&text);

    Ok(Json(UploadResponse {
        file_name,
        kind,
        text,
        sections,
    }))
}

async fn read_resume_field(multipart: &mut Multipart) -> Result<(String, Bytes), AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(RESUME_FIELD) {
            let file_name = field
                .file_name()
                .unwrap_or(FALLBACK_FILE_NAME)
                .to_string();
            let data = field.bytes().await?;
            return Ok((file_name, data));
        }
    }
    Err(AppError::Validation(format!(
        "multipart field '{RESUME_FIELD}' is required"
    )))
}
