//! Document text extraction, the seam between upload intake and the tailoring
//! pipeline.
//!
//! `AppState` holds an `Arc<dyn DocumentExtractor>`; the default backend wraps
//! the `pdf-extract` crate. Extraction is CPU-bound, so the PDF backend runs on
//! the blocking pool.

use anyhow::anyhow;
use async_trait::async_trait;
use tracing::debug;

use crate::errors::AppError;

/// Magic bytes every PDF starts with.
const PDF_MAGIC: &[u8] = b"%PDF-";

/// The document extractor trait. Implement this to swap extraction backends
/// without touching handler code.
///
/// Carried in `AppState` as `Arc<dyn DocumentExtractor>`.
#[async_trait]
pub trait DocumentExtractor: Send + Sync {
    /// Extracts the concatenated text of a document. An empty string means the
    /// document parsed but contained no extractable text; that is not an error.
    async fn extract_text(&self, bytes: &[u8]) -> Result<String, AppError>;
}

/// Default extractor: in-memory PDF text extraction via `pdf-extract`.
pub struct PdfTextExtractor;

#[async_trait]
impl DocumentExtractor for PdfTextExtractor {
    async fn extract_text(&self, bytes: &[u8]) -> Result<String, AppError> {
        let bytes = bytes.to_vec();
        let byte_count = bytes.len();

        let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
            .await
            .map_err(|e| AppError::Internal(anyhow!("extraction task failed to run: {e}")))?
            .map_err(|e| AppError::Extraction(format!("Could not extract text from PDF: {e}")))?;

        debug!(
            "Extracted {} chars of text from {} PDF bytes",
            text.len(),
            byte_count
        );

        Ok(text)
    }
}

/// Cheap check that an upload is plausibly a PDF: a `.pdf` filename (any case)
/// or the `%PDF-` magic at the start of the payload.
pub fn looks_like_pdf(filename: Option<&str>, bytes: &[u8]) -> bool {
    let name_matches = filename
        .map(|name| name.to_ascii_lowercase().ends_with(".pdf"))
        .unwrap_or(false);

    name_matches || bytes.starts_with(PDF_MAGIC)
}
