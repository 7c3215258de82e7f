//! Fetching transcript source pages.

use std::time::Duration;

use reqwest::Client;

use crate::transcript::extract::extract;
use crate::transcript::TranscriptDocument;
use crate::{GavelError, Result};

/// Fetch a transcript page and extract its structured content.
///
/// Performs exactly one outbound GET. A blank URL is a validation error;
/// transport failures and non-success statuses surface as fetch errors.
/// Extraction itself never fails.
pub async fn fetch_transcript(url: &str) -> Result<TranscriptDocument> {
    let url = url.trim();
    if url.is_empty() {
        return Err(GavelError::Validation("URL is required"));
    }

    let client = Client::builder()
        .timeout(Duration::from_secs(45))
        .build()
        .map_err(|e| GavelError::Internal(anyhow::Error::new(e)))?;

    let response = client.get(url).send().await.map_err(GavelError::Fetch)?;
    let response = response.error_for_status().map_err(GavelError::Fetch)?;
    let html = response.text().await.map_err(GavelError::Fetch)?;

    tracing::debug!(bytes = html.len(), "fetched transcript page");

    Ok(extract(&html))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn blank_url_is_rejected_before_any_request() {
        let err = fetch_transcript("   ").await.unwrap_err();
        assert!(matches!(err, GavelError::Validation(_)));
        assert_eq!(err.to_string(), "URL is required");
    }
}
