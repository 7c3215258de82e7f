//! HTTP API exposing the transcript pipeline to UI callers.
//!
//! Three JSON request/response routes, stateless between requests:
//! transcript fetch, summarization, and follow-up Q&A. Conversation history
//! is supplied by the caller on every follow-up call; nothing is stored
//! server-side.

mod error;

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::summary::{self, SummaryResult};
use crate::transcript::{self, FollowUpTurn, TranscriptDocument};
use crate::GavelError;

use error::Result;

/// Build the API router over the given settings.
pub fn router(settings: Settings) -> Router {
    Router::new()
        .route("/api/transcript", post(fetch_transcript))
        .route("/api/summary", post(summarize))
        .route("/api/followup", post(ask_followup))
        .with_state(Arc::new(settings))
}

/// Bind and serve the API until the process is stopped.
pub async fn serve(settings: Settings) -> anyhow::Result<()> {
    let bind = settings.serve.bind.clone();
    let listener = tokio::net::TcpListener::bind(&bind).await?;
    tracing::info!(addr = %listener.local_addr()?, "gavel API listening");
    axum::serve(listener, router(settings)).await?;
    Ok(())
}

#[derive(Debug, Deserialize)]
struct FetchTranscriptParams {
    #[serde(default)]
    url: Option<String>,
}

#[derive(Debug, Serialize)]
struct FetchTranscriptResponse {
    transcript: TranscriptDocument,
}

async fn fetch_transcript(
    Json(params): Json<FetchTranscriptParams>,
) -> Result<Json<FetchTranscriptResponse>> {
    let url = params.url.unwrap_or_default();
    let transcript = transcript::fetch_transcript(&url).await?;
    Ok(Json(FetchTranscriptResponse { transcript }))
}

#[derive(Debug, Deserialize)]
struct SummarizeParams {
    /// Absent (as opposed to empty) content is a validation error.
    #[serde(default)]
    transcript_content: Option<Vec<String>>,

    #[serde(default)]
    user_topics: Vec<String>,
}

#[derive(Debug, Serialize)]
struct SummarizeResponse {
    summary: String,
    is_fallback: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_detail: Option<String>,
}

impl From<SummaryResult> for SummarizeResponse {
    fn from(result: SummaryResult) -> Self {
        Self {
            summary: result.text,
            is_fallback: result.is_fallback,
            error_detail: result.error_detail,
        }
    }
}

async fn summarize(
    State(settings): State<Arc<Settings>>,
    Json(params): Json<SummarizeParams>,
) -> Result<Json<SummarizeResponse>> {
    let content = params
        .transcript_content
        .ok_or(GavelError::Validation("Transcript content is required"))?;

    let result = summary::summarize_with_settings(&settings, &content, &params.user_topics).await;
    Ok(Json(result.into()))
}

#[derive(Debug, Deserialize)]
struct FollowUpParams {
    #[serde(default)]
    question: String,

    #[serde(default)]
    transcript_content: Vec<String>,

    #[serde(default)]
    conversation_history: Vec<FollowUpTurn>,
}

#[derive(Debug, Serialize)]
struct FollowUpResponse {
    answer: String,
}

async fn ask_followup(
    State(settings): State<Arc<Settings>>,
    Json(params): Json<FollowUpParams>,
) -> Result<Json<FollowUpResponse>> {
    let answer = summary::ask_followup(
        &settings,
        &params.question,
        &params.transcript_content,
        &params.conversation_history,
    )
    .await?;
    Ok(Json(FollowUpResponse { answer }))
}
