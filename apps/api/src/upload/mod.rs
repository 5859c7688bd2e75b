//! Upload decoding: turns an uploaded resume file into plain text.
//!
//! Dispatch is by file extension: `.pdf`, `.docx`, and everything else is
//! treated as (possibly invalid) UTF-8 text. Decoding is CPU-bound and may
//! panic inside third-party parsers, so callers run it on the blocking pool.

pub mod docx;
pub mod handlers;
pub mod pdf;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("PDF parse error: {0}")]
    Pdf(String),

    #[error("DOCX parse error: {0}")]
    Docx(String),

    #[error("DOCX archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Upload format, decided by extension only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    Pdf,
    Docx,
    Text,
}

impl FileKind {
    pub fn from_file_name(file_name: &str) -> Self {
        let lowered = file_name.to_lowercase();
        if lowered.ends_with(".pdf") {
            FileKind::Pdf
        } else if lowered.ends_with(".docx") {
            FileKind::Docx
        } else {
            FileKind::Text
        }
    }
}

/// Extracts the text of an uploaded file.
pub fn extract_text(file_name: &str, data: &[u8]) -> Result<String, UploadError> {
    match FileKind::from_file_name(file_name) {
        FileKind::Pdf => pdf::extract_text(data),
        FileKind::Docx => docx::extract_text(data),
        FileKind::Text => Ok(decode_utf8_dropping_invalid(data)),
    }
}

/// UTF-8 decode that silently drops invalid byte sequences.
fn decode_utf8_dropping_invalid(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len());
    for chunk in data.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_kind_is_case_insensitive() {
        assert_eq!(FileKind::from_file_name("CV.PDF"), FileKind::Pdf);
        assert_eq!(FileKind::from_file_name("resume.Docx"), FileKind::Docx);
        assert_eq!(FileKind::from_file_name("resume.txt"), FileKind::Text);
        assert_eq!(FileKind::from_file_name("resume"), FileKind::Text);
        // Legacy .doc is not a zip archive; it is read as text
        assert_eq!(FileKind::from_file_name("resume.doc"), FileKind::Text);
    }

    #[test]
    fn test_text_upload_drops_invalid_bytes() {
        let data = b"Skills:\n\xff\xfeRust\xc3\xa9";
        assert_eq!(extract_text("cv.txt", data).unwrap(), "Skills:\nRust\u{e9}");
    }

    #[test]
    fn test_garbage_pdf_is_an_error() {
        let result = extract_text("cv.pdf", b"definitely not a pdf");
        assert!(matches!(result, Err(UploadError::Pdf(_))));
    }

    #[test]
    fn test_garbage_docx_is_a_zip_error() {
        let result = extract_text("cv.docx", b"PK but not really");
        assert!(matches!(result, Err(UploadError::Zip(_))));
    }
}
