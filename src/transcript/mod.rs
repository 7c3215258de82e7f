//! Transcript ingestion: fetching municipal meeting pages and extracting
//! structured speaker/dialogue content from uncontrolled markup.

mod document;
mod extract;
mod fetch;

pub use document::{FollowUpTurn, TranscriptDocument};
pub use extract::{extract, MAX_CONTENT_LINES};
pub use fetch::fetch_transcript;
