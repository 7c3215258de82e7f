//! Follow-up question answering over a transcript.
//!
//! Unlike summarization there is no offline fallback here: there is no safe
//! deterministic text for an open-ended question, so upstream failures
//! propagate to the caller.

use crate::config::Settings;
use crate::llm::prompts::build_followup_prompt;
use crate::llm::{build_provider, GenerationRequest, LlmError, LlmProvider};
use crate::transcript::FollowUpTurn;
use crate::{GavelError, Result};

/// Output token budget for follow-up answers.
const FOLLOWUP_MAX_OUTPUT_TOKENS: u32 = 512;

/// Sentinel returned when the upstream response carried no usable text.
const NO_ANSWER: &str = "No answer generated";

const MISSING_INPUT: &str = "Question and transcript content are required";

/// Answer a follow-up question with the given provider.
///
/// History is folded in whole; truncation policy belongs to the caller.
pub async fn answer_followup(
    provider: &dyn LlmProvider,
    question: &str,
    content: &[String],
    history: &[FollowUpTurn],
) -> Result<String> {
    if question.trim().is_empty() || content.is_empty() {
        return Err(GavelError::Validation(MISSING_INPUT));
    }

    let prompt = build_followup_prompt(question, content, history);
    let request = GenerationRequest {
        prompt: &prompt,
        max_output_tokens: FOLLOWUP_MAX_OUTPUT_TOKENS,
    };

    match provider.generate(request).await {
        Ok(answer) => Ok(answer),
        Err(LlmError::EmptyResponse) => Ok(NO_ANSWER.to_string()),
        Err(err) => Err(err.into()),
    }
}

/// Answer a follow-up question with a provider built from settings. Input
/// validation runs before provider construction, so a missing credential
/// never masks a missing question.
pub async fn ask_followup(
    settings: &Settings,
    question: &str,
    content: &[String],
    history: &[FollowUpTurn],
) -> Result<String> {
    if question.trim().is_empty() || content.is_empty() {
        return Err(GavelError::Validation(MISSING_INPUT));
    }

    let provider = build_provider(&settings.llm)?;
    answer_followup(provider.as_ref(), question, content, history).await
}
