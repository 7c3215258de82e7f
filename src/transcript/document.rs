//! Data model for extracted transcripts and follow-up conversations.

use serde::{Deserialize, Serialize};

/// Sentinel title used when no title could be extracted.
pub(crate) const UNKNOWN_TITLE: &str = "Unknown Meeting";

/// Structured record of one meeting transcript, extracted best-effort from an
/// HTML source page. Built fresh per request and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptDocument {
    /// Extracted meeting title, or "Unknown Meeting".
    pub title: String,

    /// Extracted date string, empty when absent.
    pub date: String,

    /// Unique speaker labels in first-seen order.
    pub speakers: Vec<String>,

    /// Dialogue lines in document order, either "SPEAKER: text" or a bare
    /// text fragment when attribution failed. At most 50 entries.
    pub content: Vec<String>,
}

impl TranscriptDocument {
    pub(crate) fn new(title: String, date: String) -> Self {
        Self {
            title,
            date,
            speakers: Vec::new(),
            content: Vec::new(),
        }
    }
}

/// One prior question/answer pair, supplied by the caller to give
/// conversational context to a new follow-up question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowUpTurn {
    pub question: String,
    pub answer: String,
}
