// Prompt constants for the tailoring pipeline.

/// Tailoring prompt template. Replace `{resume_text}` and `{job_description}`
/// before sending.
///
/// The numbered items name the three section labels on purpose: the
/// sectionizer finds them as headings in the model's answer.
pub const TAILOR_PROMPT_TEMPLATE: &str = r#"You are an AI career assistant.
Compare this resume and job description, then provide:
1. A 4-line summary tailored to this job.
2. A list of missing or underrepresented keywords/skills.
3. A short 1-paragraph cover letter draft.

Resume:
{resume_text}

Job Description:
{job_description}"#;

/// Sample job description behind the "Try with sample data" button.
pub const SAMPLE_JOB_DESCRIPTION: &str =
    "We are looking for a Python Developer with experience in APIs and automation testing.";

/// Fills the tailoring prompt template.
pub fn build_tailor_prompt(resume_text: &str, job_description: &str) -> String {
    TAILOR_PROMPT_TEMPLATE
        .replace("{resume_text}", resume_text)
        .replace("{job_description}", job_description)
}
