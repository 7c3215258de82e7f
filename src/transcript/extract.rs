//! Best-effort transcript extraction from uncontrolled HTML.
//!
//! Source pages have no stable schema, so extraction is an ordered chain of
//! heuristic passes: a structured speaker/dialogue parse when the expected
//! layout holds, and a coarse text-run salvage otherwise. Extraction never
//! fails; missing fields degrade to sentinel/empty values.

use regex::Regex;

use crate::transcript::document::{TranscriptDocument, UNKNOWN_TITLE};

/// Hard cap on extracted dialogue lines.
pub const MAX_CONTENT_LINES: usize = 50;

/// Embedded timestamp markup, e.g. `<i>1234.56</i>`.
const TIMESTAMP_PATTERN: &str = r"<i>[\d.]+</i>";

/// One heuristic attempt to locate dialogue within markup.
///
/// Passes are tried in priority order; the first one that yields any lines
/// wins and later passes are skipped.
trait DialoguePass {
    fn try_extract(&self, html: &str) -> Option<Dialogue>;
}

#[derive(Debug, Default)]
struct Dialogue {
    speakers: Vec<String>,
    lines: Vec<String>,
}

/// Primary pass: repeating `<i>ts</i> SPEAKER <i>ts</i> -<i>ts</i> text`
/// blocks, with timestamp markers stripped out of the dialogue text.
struct SpeakerBlockPass;

impl DialoguePass for SpeakerBlockPass {
    fn try_extract(&self, html: &str) -> Option<Dialogue> {
        let block = Regex::new(
            r"<i>[\d.]+</i>\s*([A-Z\s&]+)<i>[\d.]+</i>\s*-<i>[\d.]+</i>\s*([^<]*(?:<i>[\d.]+</i>\s*[^<]*)*)",
        )
        .unwrap();
        let timestamp = Regex::new(TIMESTAMP_PATTERN).unwrap();

        let mut dialogue = Dialogue::default();

        for captures in block.captures_iter(html) {
            let speaker = captures[1].trim().to_string();
            let text = timestamp.replace_all(&captures[2], "").trim().to_string();

            // "SPEAKER" is the source's placeholder for unattributed dialogue.
            if speaker.is_empty() || text.is_empty() || speaker.contains("SPEAKER") {
                continue;
            }

            if !dialogue.speakers.contains(&speaker) {
                dialogue.speakers.push(speaker.clone());
            }
            dialogue.lines.push(format!("{}: {}", speaker, text));
        }

        if dialogue.lines.is_empty() {
            None
        } else {
            Some(dialogue)
        }
    }
}

/// Salvage pass: after stripping timestamps, keep any text run between markup
/// boundaries that starts with an uppercase letter, is long enough to be
/// prose, and does not look like a raw attribute blob. No speaker
/// attribution is attempted.
struct TextRunPass;

impl DialoguePass for TextRunPass {
    fn try_extract(&self, html: &str) -> Option<Dialogue> {
        let timestamp = Regex::new(TIMESTAMP_PATTERN).unwrap();
        let text_run = Regex::new(r">([A-Z][^<]{20,})<").unwrap();

        let cleaned = timestamp.replace_all(html, "");
        let mut dialogue = Dialogue::default();

        for captures in text_run.captures_iter(&cleaned) {
            let text = captures[1].trim();
            if text.len() > 30 && !text.contains("class=") && !text.contains("style=") {
                dialogue.lines.push(text.to_string());
            }
        }

        if dialogue.lines.is_empty() {
            None
        } else {
            Some(dialogue)
        }
    }
}

/// Extract a structured transcript from raw HTML. Never fails: fields that
/// cannot be located degrade to their sentinel/empty values.
pub fn extract(html: &str) -> TranscriptDocument {
    let title = Regex::new(r#"<div class="text-3xl font-black text-center">\s*([^<]+)"#)
        .unwrap()
        .captures(html)
        .map(|c| c[1].trim().to_string())
        .unwrap_or_else(|| UNKNOWN_TITLE.to_string());

    let date = Regex::new(r#"<div class="mx-auto text-xl text-gray-500">\s*([^<]+)"#)
        .unwrap()
        .captures(html)
        .map(|c| c[1].trim().to_string())
        .unwrap_or_default();

    let mut document = TranscriptDocument::new(title, date);

    let passes: [&dyn DialoguePass; 2] = [&SpeakerBlockPass, &TextRunPass];
    for pass in passes {
        if let Some(dialogue) = pass.try_extract(html) {
            document.speakers = dialogue.speakers;
            document.content = dialogue.lines;
            break;
        }
    }

    document.content.truncate(MAX_CONTENT_LINES);
    document
}
