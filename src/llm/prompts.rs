//! Prompt construction for summaries and follow-up questions.
//!
//! Pure functions. At most the first [`MAX_PROMPT_LINES`] transcript lines
//! ever reach a prompt; the tail is dropped outright, not summarized.

use crate::transcript::FollowUpTurn;

/// Hard ceiling on transcript lines included in any prompt.
pub const MAX_PROMPT_LINES: usize = 100;

fn transcript_excerpt(lines: &[String]) -> String {
    lines
        .iter()
        .take(MAX_PROMPT_LINES)
        .cloned()
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the four-section summary prompt. The section headers are a
/// structural contract: downstream rendering expects them in this order.
pub fn build_summary_prompt(lines: &[String], topics: &[String]) -> String {
    let topics_context = if topics.is_empty() {
        String::new()
    } else {
        format!(
            "\n\nThe user is particularly interested in these topics: {}. \
             Please highlight any connections to these topics in your summary.",
            topics.join(", ")
        )
    };

    let relevance_instruction = if topics.is_empty() {
        "Explain the broader significance of this meeting for the community.".to_string()
    } else {
        format!(
            "Explain how this meeting relates to the user's topics of interest: {}.",
            topics.join(", ")
        )
    };

    format!(
        "You are analyzing a municipal meeting transcript. Please provide a concise summary \
         with the following sections:\n\
         \n\
         1. **Meeting Overview**: A brief 2-3 sentence summary of what this meeting was about.\n\
         \n\
         2. **Key Takeaways & Agreements**: List the main decisions, agreements, or outcomes \
         from the meeting.\n\
         \n\
         3. **Main Talking Points**: Highlight the primary topics discussed and any significant \
         debates or concerns raised.\n\
         \n\
         4. **Relevance to User Interests**: {relevance_instruction}{topics_context}\n\
         \n\
         Here is the transcript content:\n\
         \n\
         {excerpt}\n\
         \n\
         Please format your response with clear section headers and bullet points where \
         appropriate. Keep the summary concise but informative.",
        excerpt = transcript_excerpt(lines),
    )
}

/// Build a follow-up prompt, threading prior turns ahead of the question.
/// The history block is omitted entirely when there are no prior turns.
pub fn build_followup_prompt(
    question: &str,
    lines: &[String],
    history: &[FollowUpTurn],
) -> String {
    let history_context = if history.is_empty() {
        String::new()
    } else {
        let turns = history
            .iter()
            .map(|turn| format!("Q: {}\nA: {}", turn.question, turn.answer))
            .collect::<Vec<_>>()
            .join("\n\n");
        format!("\n\nPrevious conversation:\n{turns}")
    };

    format!(
        "You are an AI assistant helping users understand a municipal meeting transcript. \
         Answer the user's question based on the transcript content provided.\n\
         {history_context}\n\
         \n\
         Transcript content:\n\
         {excerpt}\n\
         \n\
         User's question: {question}\n\
         \n\
         Please provide a clear, concise answer based on the transcript. If the information \
         isn't in the transcript, say so. Format your response in markdown for readability.",
        excerpt = transcript_excerpt(lines),
    )
}
