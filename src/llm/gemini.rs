use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::config::LlmSettings;
use crate::llm::client::{GenerationRequest, LlmError, LlmProvider};

const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

/// Fixed sampling temperature for all generation calls.
const TEMPERATURE: f32 = 0.7;

pub struct GeminiClient {
    http: Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl GeminiClient {
    pub fn from_settings(settings: &LlmSettings) -> Result<Self, LlmError> {
        let api_key = settings.api_key.trim().to_string();
        if api_key.is_empty() {
            return Err(LlmError::MissingApiKey);
        }

        let model = if settings.model.trim().is_empty() {
            DEFAULT_GEMINI_MODEL.to_string()
        } else {
            settings.model.trim().to_string()
        };

        let endpoint = if settings.endpoint.trim().is_empty() {
            DEFAULT_GEMINI_ENDPOINT.to_string()
        } else {
            settings.endpoint.trim().trim_end_matches('/').to_string()
        };

        Ok(Self {
            http: Client::builder()
                .timeout(std::time::Duration::from_secs(45))
                .build()
                .map_err(LlmError::Transport)?,
            api_key,
            model,
            endpoint,
        })
    }

    fn request_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.endpoint, self.model, self.api_key
        )
    }
}

#[async_trait]
impl LlmProvider for GeminiClient {
    async fn generate(&self, request: GenerationRequest<'_>) -> Result<String, LlmError> {
        let body = GeminiGenerateContentRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: request.prompt.to_string(),
                }],
            }],
            generation_config: GeminiGenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: request.max_output_tokens,
            },
        };

        let response = self
            .http
            .post(self.request_url())
            .json(&body)
            .send()
            .await
            .map_err(LlmError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, "Gemini returned an error status");
            return Err(match status {
                StatusCode::TOO_MANY_REQUESTS => LlmError::QuotaExceeded,
                StatusCode::NOT_FOUND => LlmError::ModelUnavailable,
                _ => LlmError::Status(status.as_u16()),
            });
        }

        let payload: GeminiGenerateContentResponse =
            response.json().await.map_err(LlmError::Transport)?;

        payload
            .candidates
            .iter()
            .flat_map(|c| c.content.parts.iter())
            .filter_map(|p| p.text.as_deref())
            .map(str::trim)
            .find(|t| !t.is_empty())
            .map(str::to_string)
            .ok_or(LlmError::EmptyResponse)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerateContentRequest {
    contents: Vec<GeminiContent>,
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GeminiGenerateContentResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiContentResponse,
}

#[derive(Debug, Deserialize)]
struct GeminiContentResponse {
    #[serde(default)]
    parts: Vec<GeminiPartResponse>,
}

#[derive(Debug, Deserialize)]
struct GeminiPartResponse {
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(server_url: &str) -> GeminiClient {
        let settings = LlmSettings {
            provider: "gemini".to_string(),
            api_key: "test-key".to_string(),
            model: "gemini-2.0-flash".to_string(),
            endpoint: server_url.to_string(),
        };
        GeminiClient::from_settings(&settings).unwrap()
    }

    #[tokio::test]
    async fn returns_first_non_empty_candidate_text() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock(
                "POST",
                "/models/gemini-2.0-flash:generateContent?key=test-key",
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"candidates":[{"content":{"parts":[{"text":"  "},{"text":"Summary body"}]}}]}"#,
            )
            .create_async()
            .await;

        let client = client_for(&server.url());
        let text = client
            .generate(GenerationRequest {
                prompt: "prompt",
                max_output_tokens: 1024,
            })
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(text, "Summary body");
    }

    #[tokio::test]
    async fn rate_limit_status_classifies_as_quota_exceeded() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock(
                "POST",
                "/models/gemini-2.0-flash:generateContent?key=test-key",
            )
            .with_status(429)
            .create_async()
            .await;

        let client = client_for(&server.url());
        let err = client
            .generate(GenerationRequest {
                prompt: "prompt",
                max_output_tokens: 1024,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, LlmError::QuotaExceeded));
    }

    #[tokio::test]
    async fn not_found_status_classifies_as_model_unavailable() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock(
                "POST",
                "/models/gemini-2.0-flash:generateContent?key=test-key",
            )
            .with_status(404)
            .create_async()
            .await;

        let client = client_for(&server.url());
        let err = client
            .generate(GenerationRequest {
                prompt: "prompt",
                max_output_tokens: 512,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, LlmError::ModelUnavailable));
    }

    #[tokio::test]
    async fn empty_candidates_classify_as_empty_response() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock(
                "POST",
                "/models/gemini-2.0-flash:generateContent?key=test-key",
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"candidates":[]}"#)
            .create_async()
            .await;

        let client = client_for(&server.url());
        let err = client
            .generate(GenerationRequest {
                prompt: "prompt",
                max_output_tokens: 512,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, LlmError::EmptyResponse));
    }
}
