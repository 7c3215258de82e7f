//! LLM module for gavel
//!
//! Handles AI-powered summaries and Q&A using the Gemini API.

mod client;
mod gemini;
pub mod prompts;

pub use client::{build_provider, GenerationRequest, LlmError, LlmProvider};
pub use gemini::GeminiClient;
