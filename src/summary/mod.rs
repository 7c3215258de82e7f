//! Transcript summarization with a deterministic offline fallback.
//!
//! Summarization never errors outward: every failure path resolves to a
//! [`SummaryResult`], so callers never branch on which code path produced
//! the text.

mod followup;

pub use followup::{answer_followup, ask_followup};

use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::llm::prompts::build_summary_prompt;
use crate::llm::{build_provider, GenerationRequest, LlmError, LlmProvider};

/// Output token budget for summary generation.
const SUMMARY_MAX_OUTPUT_TOKENS: u32 = 1024;

const NO_CONTENT_MESSAGE: &str = "No transcript content available to summarize.";

/// Result of one summarization call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResult {
    /// The summary text, AI-generated or deterministic fallback.
    pub text: String,

    /// True when the text came from the local fallback generator rather
    /// than the external service.
    pub is_fallback: bool,

    /// Human-readable classification of the failure that triggered the
    /// fallback. Advisory only, never a retry signal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_detail: Option<String>,
}

impl SummaryResult {
    fn generated(text: String) -> Self {
        Self {
            text,
            is_fallback: false,
            error_detail: None,
        }
    }

    fn no_content() -> Self {
        Self {
            text: NO_CONTENT_MESSAGE.to_string(),
            is_fallback: true,
            error_detail: None,
        }
    }
}

/// Map a provider failure onto the small advisory vocabulary callers see.
fn classify(err: &LlmError) -> &'static str {
    match err {
        LlmError::QuotaExceeded => "API quota exceeded",
        LlmError::ModelUnavailable => "AI model not available",
        _ => "Failed to generate summary",
    }
}

/// Deterministic local summary used whenever the external call fails. It
/// mirrors the four-section shape of a real summary so downstream rendering
/// never sees a differently shaped payload.
fn fallback_summary(content: &[String], topics: &[String], detail: &str) -> SummaryResult {
    let interests = if topics.is_empty() {
        "- No specific topics were provided; review the transcript for items relevant to your \
         community."
            .to_string()
    } else {
        format!(
            "- Topics you follow: {}. Search the transcript for these terms directly.",
            topics.join(", ")
        )
    };

    let text = format!(
        "1. **Meeting Overview**\n\
         An automated summary could not be generated. The extracted transcript contains \
         {count} dialogue lines and is available for direct review.\n\
         \n\
         2. **Key Takeaways & Agreements**\n\
         - Review the transcript below for decisions, agreements, and outcomes.\n\
         \n\
         3. **Main Talking Points**\n\
         - The transcript captures the discussion as recorded; no AI analysis was applied.\n\
         \n\
         4. **Relevance to User Interests**\n\
         {interests}",
        count = content.len(),
    );

    SummaryResult {
        text,
        is_fallback: true,
        error_detail: Some(detail.to_string()),
    }
}

/// Summarize transcript content with the given provider.
///
/// Empty content short-circuits to a static result without touching the
/// network. Exactly one external call is made otherwise; there is no retry
/// loop, and any failure goes straight to the fallback generator.
pub async fn summarize(
    provider: &dyn LlmProvider,
    content: &[String],
    topics: &[String],
) -> SummaryResult {
    if content.is_empty() {
        return SummaryResult::no_content();
    }

    let prompt = build_summary_prompt(content, topics);
    let request = GenerationRequest {
        prompt: &prompt,
        max_output_tokens: SUMMARY_MAX_OUTPUT_TOKENS,
    };

    match provider.generate(request).await {
        Ok(text) => SummaryResult::generated(text),
        Err(err) => {
            tracing::warn!(error = %err, "summary generation failed, using fallback");
            fallback_summary(content, topics, classify(&err))
        }
    }
}

/// Summarize with a provider built from settings. A missing credential or
/// unsupported provider is itself a fallback-triggering failure.
pub async fn summarize_with_settings(
    settings: &Settings,
    content: &[String],
    topics: &[String],
) -> SummaryResult {
    if content.is_empty() {
        return SummaryResult::no_content();
    }

    match build_provider(&settings.llm) {
        Ok(provider) => summarize(provider.as_ref(), content, topics).await,
        Err(err) => {
            tracing::warn!(error = %err, "no usable LLM provider, using fallback");
            fallback_summary(content, topics, classify(&err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubProvider {
        outcome: Result<String, LlmError>,
        calls: AtomicUsize,
    }

    impl StubProvider {
        fn ok(text: &str) -> Self {
            Self {
                outcome: Ok(text.to_string()),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing(err: LlmError) -> Self {
            Self {
                outcome: Err(err),
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl LlmProvider for StubProvider {
        async fn generate(&self, _request: GenerationRequest<'_>) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.outcome {
                Ok(text) => Ok(text.clone()),
                Err(LlmError::QuotaExceeded) => Err(LlmError::QuotaExceeded),
                Err(LlmError::ModelUnavailable) => Err(LlmError::ModelUnavailable),
                Err(LlmError::EmptyResponse) => Err(LlmError::EmptyResponse),
                Err(LlmError::MissingApiKey) => Err(LlmError::MissingApiKey),
                Err(LlmError::Status(code)) => Err(LlmError::Status(*code)),
                Err(other) => panic!("unsupported stub outcome: {other}"),
            }
        }
    }

    fn content(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("line{}", i + 1)).collect()
    }

    #[tokio::test]
    async fn empty_content_short_circuits_without_calling_provider() {
        let provider = StubProvider::ok("unused");
        let result = summarize(&provider, &[], &["zoning".to_string()]).await;

        assert_eq!(provider.call_count(), 0);
        assert!(result.is_fallback);
        assert_eq!(result.text, NO_CONTENT_MESSAGE);
    }

    #[tokio::test]
    async fn successful_generation_is_not_a_fallback() {
        let provider = StubProvider::ok("A fine AI summary.");
        let result = summarize(&provider, &content(2), &[]).await;

        assert_eq!(provider.call_count(), 1);
        assert!(!result.is_fallback);
        assert!(result.error_detail.is_none());
        assert_eq!(result.text, "A fine AI summary.");
    }

    #[tokio::test]
    async fn failure_produces_fallback_with_line_count_and_topics() {
        let provider = StubProvider::failing(LlmError::EmptyResponse);
        let topics = vec!["zoning".to_string(), "housing".to_string()];
        let result = summarize(&provider, &content(2), &topics).await;

        assert!(result.is_fallback);
        assert!(result.text.contains("2 dialogue lines"));
        assert!(result.text.contains("zoning"));
        assert!(result.text.contains("housing"));
        assert_eq!(result.error_detail.as_deref(), Some("Failed to generate summary"));
    }

    #[tokio::test]
    async fn fallback_keeps_the_four_section_shape() {
        let provider = StubProvider::failing(LlmError::QuotaExceeded);
        let result = summarize(&provider, &content(3), &[]).await;

        for header in [
            "Meeting Overview",
            "Key Takeaways & Agreements",
            "Main Talking Points",
            "Relevance to User Interests",
        ] {
            assert!(result.text.contains(header), "missing section: {header}");
        }
    }

    #[tokio::test]
    async fn quota_failure_is_classified() {
        let provider = StubProvider::failing(LlmError::QuotaExceeded);
        let result = summarize(&provider, &content(1), &[]).await;
        assert_eq!(result.error_detail.as_deref(), Some("API quota exceeded"));
    }

    #[tokio::test]
    async fn model_failure_is_classified() {
        let provider = StubProvider::failing(LlmError::ModelUnavailable);
        let result = summarize(&provider, &content(1), &[]).await;
        assert_eq!(result.error_detail.as_deref(), Some("AI model not available"));
    }

    #[tokio::test]
    async fn missing_credential_falls_back_without_network() {
        // Default settings carry no API key, so provider construction fails
        // before any request is attempted.
        let settings = Settings::default();

        let result =
            summarize_with_settings(&settings, &content(2), &["zoning".to_string()]).await;
        assert!(result.is_fallback);
        assert!(result.text.contains("zoning"));
        assert_eq!(
            result.error_detail.as_deref(),
            Some("Failed to generate summary")
        );
    }
}
