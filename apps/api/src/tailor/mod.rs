// Tailoring pipeline: upload intake, text extraction, one LLM call, response
// sectionizing, display fallbacks.
// All LLM calls go through llm_client; no direct Groq calls here.

pub mod handlers;
pub mod prompts;
pub mod sectionizer;
