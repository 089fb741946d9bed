use std::sync::Arc;

use crate::extraction::DocumentExtractor;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup; nothing here is mutated across requests.
#[derive(Clone)]
pub struct AppState {
    /// LLM client, present only when GROQ_API_KEY is configured.
    /// Handlers check this before making any external call.
    pub llm: Option<LlmClient>,
    /// Pluggable document text extraction. Default: PdfTextExtractor.
    pub extractor: Arc<dyn DocumentExtractor>,
}
