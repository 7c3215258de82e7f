//! Configuration module for gavel
//!
//! Handles loading and managing application settings from TOML files.

mod settings;

pub use settings::{LlmSettings, ServeSettings, Settings};
