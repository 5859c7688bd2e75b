use super::UploadError;

/// Extracts the text layer of a PDF held in memory.
pub fn extract_text(data: &[u8]) -> Result<String, UploadError> {
    pdf_extract::extract_text_from_mem(data).map_err(|e| UploadError::Pdf(e.to_string()))
}
