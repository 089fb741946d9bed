use axum::response::Html;

use crate::tailor::prompts::SAMPLE_JOB_DESCRIPTION;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// GET /
/// Serves the single page with the sample job description injected.
pub async fn index_handler() -> Html<String> {
    Html(INDEX_HTML.replace("{sample_job_description}", SAMPLE_JOB_DESCRIPTION))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_template_carries_the_sample_placeholder() {
        assert!(INDEX_HTML.contains("{sample_job_description}"));
    }

    #[tokio::test]
    async fn test_rendered_page_embeds_sample_job_description() {
        let Html(page) = index_handler().await;

        assert!(page.contains(SAMPLE_JOB_DESCRIPTION));
        assert!(!page.contains("{sample_job_description}"));
    }
}
