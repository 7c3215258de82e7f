//! CLI command implementations

use anyhow::{Context, Result};
use std::path::Path;

use crate::api;
use crate::cli::args::ConfigCommand;
use crate::config::Settings;
use crate::summary;
use crate::transcript::{self, FollowUpTurn, TranscriptDocument};

/// Fetch a transcript and print it
pub async fn fetch_transcript(url: &str, json: bool) -> Result<()> {
    let document = transcript::fetch_transcript(url).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&document)?);
        return Ok(());
    }

    print_document(&document);
    Ok(())
}

fn print_document(document: &TranscriptDocument) {
    println!("{}", document.title);
    if !document.date.is_empty() {
        println!("{}", document.date);
    }

    if !document.speakers.is_empty() {
        println!();
        println!("Speakers: {}", document.speakers.join(", "));
    }

    println!();
    if document.content.is_empty() {
        println!("No dialogue could be extracted from this page.");
        return;
    }

    for (idx, line) in document.content.iter().enumerate() {
        println!("{:>3}. {}", idx + 1, line);
    }
}

/// Fetch a transcript and generate a summary
pub async fn summarize_transcript(
    settings: &Settings,
    url: &str,
    topics: &[String],
    json: bool,
) -> Result<()> {
    let document = transcript::fetch_transcript(url).await?;
    let result = summary::summarize_with_settings(settings, &document.content, topics).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("{}", document.title);
    println!();
    println!("{}", result.text);

    if result.is_fallback {
        println!();
        match &result.error_detail {
            Some(detail) => println!("(offline fallback summary: {})", detail),
            None => println!("(offline fallback summary)"),
        }
    }

    Ok(())
}

/// Fetch a transcript and ask a follow-up question about it
pub async fn ask_followup(
    settings: &Settings,
    url: &str,
    question: &str,
    history_path: Option<&Path>,
) -> Result<()> {
    // Validate before the transcript fetch so a blank question never costs
    // a network round trip.
    if question.trim().is_empty() {
        anyhow::bail!("Question and transcript content are required");
    }

    let history = match history_path {
        Some(path) => load_history(path)?,
        None => Vec::new(),
    };

    let document = transcript::fetch_transcript(url).await?;
    let answer = summary::ask_followup(settings, question, &document.content, &history).await?;

    println!("{}", answer);
    Ok(())
}

fn load_history(path: &Path) -> Result<Vec<FollowUpTurn>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read history file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse history file: {}", path.display()))
}

/// Run the HTTP API server
pub async fn serve(settings: &Settings, bind: Option<String>) -> Result<()> {
    let mut settings = settings.clone();
    if let Some(bind) = bind {
        settings.serve.bind = bind;
    }
    api::serve(settings).await
}

pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let toml = toml::to_string_pretty(settings)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}
