use async_trait::async_trait;
use thiserror::Error;

use crate::config::LlmSettings;
use crate::llm::gemini::GeminiClient;

/// Single text-generation request payload.
pub struct GenerationRequest<'a> {
    pub prompt: &'a str,
    pub max_output_tokens: u32,
}

/// Failures from the text-generation provider. The quota and model variants
/// carry the human-readable classification the summarization fallback
/// reports; everything else maps to a generic failure message there.
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("API quota exceeded")]
    QuotaExceeded,

    #[error("AI model not available")]
    ModelUnavailable,

    #[error("Gemini API key is missing. Set llm.api_key in config or GAVEL_GEMINI_API_KEY.")]
    MissingApiKey,

    #[error("Unsupported llm.provider '{0}'. Supported providers: gemini")]
    UnsupportedProvider(String),

    #[error("Text generation request failed with status {0}")]
    Status(u16),

    #[error("Text generation request failed")]
    Transport(#[source] reqwest::Error),

    #[error("Text generation response did not contain any text")]
    EmptyResponse,
}

#[async_trait]
pub trait LlmProvider: Send + Sync {
    async fn generate(&self, request: GenerationRequest<'_>) -> Result<String, LlmError>;
}

/// Build an LLM provider from runtime settings.
pub fn build_provider(settings: &LlmSettings) -> Result<Box<dyn LlmProvider>, LlmError> {
    match settings.provider.to_lowercase().as_str() {
        "gemini" => Ok(Box::new(GeminiClient::from_settings(settings)?)),
        other => Err(LlmError::UnsupportedProvider(other.to_string())),
    }
}
