//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// gavel - Fetch, summarize, and question municipal meeting transcripts
#[derive(Parser, Debug)]
#[command(name = "gavel")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a transcript page and print its extracted content
    Fetch {
        /// URL of the transcript page
        url: String,

        /// Print the raw JSON document instead of formatted output
        #[arg(long)]
        json: bool,
    },

    /// Fetch a transcript and generate an AI summary
    Summarize {
        /// URL of the transcript page
        url: String,

        /// Topic of interest to relate the summary to (repeatable)
        #[arg(short, long = "topic")]
        topics: Vec<String>,

        /// Print the summary result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Ask a follow-up question about a transcript
    Ask {
        /// URL of the transcript page
        url: String,

        /// The question to ask
        question: String,

        /// JSON file with prior question/answer turns, oldest first
        #[arg(long)]
        history: Option<PathBuf>,
    },

    /// Run the HTTP API server
    Serve {
        /// Address to bind, overriding the configured one
        #[arg(short, long)]
        bind: Option<String>,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
