//! gavel - Fetch, summarize, and question municipal meeting transcripts
//!
//! "gavel" because every municipal meeting starts and ends with one.

pub mod api;
pub mod cli;
pub mod config;
pub mod llm;
pub mod summary;
pub mod transcript;

use thiserror::Error;

use crate::llm::LlmError;

/// Main error type for gavel
#[derive(Error, Debug)]
pub enum GavelError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Missing or malformed caller input. Reported before any network call.
    #[error("{0}")]
    Validation(&'static str),

    /// The transcript page could not be retrieved.
    #[error("Failed to fetch transcript")]
    Fetch(#[source] reqwest::Error),

    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, GavelError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "gavel";
