//! gavel - Fetch, summarize, and question municipal meeting transcripts
//!
//! Entry point for the gavel CLI application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use gavel::cli::{Cli, Commands};
use gavel::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    match cli.command {
        Commands::Completions { shell } => {
            gavel::cli::completions::print(shell);
        }
        command => {
            // Load configuration only for runtime commands.
            let settings = Settings::load()?;

            match command {
                Commands::Fetch { url, json } => {
                    gavel::cli::commands::fetch_transcript(&url, json).await?;
                }
                Commands::Summarize { url, topics, json } => {
                    gavel::cli::commands::summarize_transcript(&settings, &url, &topics, json)
                        .await?;
                }
                Commands::Ask {
                    url,
                    question,
                    history,
                } => {
                    gavel::cli::commands::ask_followup(
                        &settings,
                        &url,
                        &question,
                        history.as_deref(),
                    )
                    .await?;
                }
                Commands::Serve { bind } => {
                    gavel::cli::commands::serve(&settings, bind).await?;
                }
                Commands::Config(config_cmd) => {
                    gavel::cli::commands::config_command(&settings, config_cmd)?;
                }
                Commands::Completions { .. } => unreachable!(),
            }
        }
    }

    Ok(())
}
