//! Axum route handlers for the Tailoring API.

use axum::{
    extract::{Multipart, State},
    http::header,
    response::{IntoResponse, Response},
    Form, Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extraction::looks_like_pdf;
use crate::state::AppState;
use crate::tailor::prompts::build_tailor_prompt;
use crate::tailor::sectionizer::SectionMap;

/// Shown when the model output has no recognizable keyword section.
pub const MISSING_KEYWORDS_FALLBACK: &str = "Not identified clearly.";
/// Shown when the model output has no recognizable cover letter.
pub const COVER_LETTER_FALLBACK: &str = "No cover letter generated.";
/// Fixed name of the downloadable artifact.
pub const EXPORT_FILE_NAME: &str = "tailored_resume_output.txt";

const MISSING_INPUT_MESSAGE: &str = "Please upload your resume and paste the job description.";
const MISSING_KEY_MESSAGE: &str =
    "GROQ_API_KEY is not configured. Set it in the server environment before generating.";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct TailorResponse {
    /// The unmodified model response; also the content of the download artifact.
    pub raw_output: String,
    pub summary: String,
    pub missing_keywords: String,
    pub cover_letter: String,
}

impl TailorResponse {
    /// Sectionizes the raw output and applies the display fallbacks: an absent
    /// summary falls back to the full raw output, the other two sections to
    /// fixed messages.
    pub fn from_raw_output(raw_output: String) -> Self {
        let sections = SectionMap::parse(&raw_output);

        let summary = if sections.summary.is_empty() {
            raw_output.clone()
        } else {
            sections.summary
        };
        let missing_keywords = if sections.missing_keywords.is_empty() {
            MISSING_KEYWORDS_FALLBACK.to_string()
        } else {
            sections.missing_keywords
        };
        let cover_letter = if sections.cover_letter.is_empty() {
            COVER_LETTER_FALLBACK.to_string()
        } else {
            sections.cover_letter
        };

        TailorResponse {
            raw_output,
            summary,
            missing_keywords,
            cover_letter,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub raw_output: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/tailor
///
/// Multipart form: `resume` (PDF file) and `job_description` (text).
/// Runs the whole pipeline: validate → extract → prompt → LLM → sectionize.
pub async fn handle_tailor(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<TailorResponse>, AppError> {
    let mut resume_bytes: Option<Bytes> = None;
    let mut resume_filename: Option<String> = None;
    let mut job_description = String::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart request: {e}")))?
    {
        // Bound to an owned name up front: reading the body consumes the field.
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("resume") => {
                resume_filename = field.file_name().map(str::to_string);
                resume_bytes = Some(field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("Could not read the uploaded resume: {e}"))
                })?);
            }
            Some("job_description") => {
                job_description = field.text().await.map_err(|e| {
                    AppError::Validation(format!("Could not read the job description: {e}"))
                })?;
            }
            _ => {} // unknown fields ignored
        }
    }

    // Inputs first, then the credential; nothing external is called until
    // every precondition passes.
    let resume_bytes = match resume_bytes {
        Some(bytes) if !bytes.is_empty() && !job_description.trim().is_empty() => bytes,
        _ => return Err(AppError::Validation(MISSING_INPUT_MESSAGE.to_string())),
    };

    if !looks_like_pdf(resume_filename.as_deref(), &resume_bytes) {
        return Err(AppError::Validation(
            "Only PDF files are supported.".to_string(),
        ));
    }

    let llm = state
        .llm
        .as_ref()
        .ok_or_else(|| AppError::Validation(MISSING_KEY_MESSAGE.to_string()))?;

    // Empty extracted text is not an error; a blank resume body still goes
    // into the prompt.
    let resume_text = state.extractor.extract_text(&resume_bytes).await?;

    let prompt = build_tailor_prompt(&resume_text, &job_description);
    let raw_output = llm
        .call(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Tailoring call failed: {e}")))?;

    Ok(Json(TailorResponse::from_raw_output(raw_output)))
}

/// POST /api/v1/tailor/export
///
/// Re-emits a generated raw output as a plain-text attachment with the fixed
/// artifact name. Form-encoded so a plain HTML form triggers a native browser
/// download.
pub async fn handle_export(Form(request): Form<ExportRequest>) -> Result<Response, AppError> {
    if request.raw_output.trim().is_empty() {
        return Err(AppError::Validation(
            "There is no generated output to download.".to_string(),
        ));
    }

    let headers = [
        (
            header::CONTENT_TYPE,
            "text/plain; charset=utf-8".to_string(),
        ),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{EXPORT_FILE_NAME}\""),
        ),
    ];

    Ok((headers, request.raw_output).into_response())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
