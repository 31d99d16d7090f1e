#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Narrative summarizer backed by an LLM provider.
//!
//! Takes a capped sample of the dataset, serialized as CSV text, and asks
//! the provider for a markdown analysis. The returned prose is treated as
//! opaque: it is attached to the analysis response verbatim and never
//! parsed or validated.
//!
//! This crate's public entry point never fails past its boundary: a missing
//! API key, a network error, or a malformed provider response all resolve
//! to a human-readable string substituted for the narrative text, so the
//! rest of the analysis response is unaffected.

pub mod providers;

use thiserror::Error;

/// Maximum number of dataset rows handed to the provider.
pub const MAX_SAMPLE_ROWS: usize = 200;

/// Fixed response when no provider credentials are configured.
const NOT_CONFIGURED: &str = "Gemini API key not set.";

/// Errors that can occur during narrative generation.
#[derive(Debug, Error)]
pub enum AiError {
    /// HTTP request to the provider failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Provider-specific error.
    #[error("Provider error: {message}")]
    Provider {
        /// Description of what went wrong.
        message: String,
    },

    /// Configuration error.
    #[error("Configuration error: {message}")]
    Config {
        /// Description.
        message: String,
    },
}

/// Builds the analyst prompt around the CSV sample.
#[must_use]
pub fn build_prompt(csv_sample: &str) -> String {
    format!(
        "You are an expert airline data analyst. Analyze the following airline flight CSV data and provide:\n\
         1. Three insightful bullet points (in markdown, with bolded keywords) about demand trends, pricing changes, and popular routes.\n\
         2. A markdown table summarizing the top 3 airlines by average price (columns: Airline, Avg Price).\n\
         Respond in markdown format only.\n\n{csv_sample}"
    )
}

/// Generates the narrative for a CSV sample using the provider configured
/// in the environment.
///
/// Never returns an error: failures become the returned text. When no API
/// key is configured the narrative degrades to a fixed "not configured"
/// string instead of failing the caller's response.
pub async fn narrative_for_sample(csv_sample: &str) -> String {
    let provider = match providers::create_provider_from_env() {
        Ok(provider) => provider,
        Err(e) => {
            log::warn!("Narrative provider not configured: {e}");
            return NOT_CONFIGURED.to_string();
        }
    };

    match provider.generate(&build_prompt(csv_sample)).await {
        Ok(text) => text,
        Err(e) => {
            log::error!("Narrative generation failed: {e}");
            format!("AI insight error: {e}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_the_csv_sample() {
        let prompt = build_prompt("Airline Company,Price\nUnited,$120\n");
        assert!(prompt.contains("United,$120"));
        assert!(prompt.starts_with("You are an expert airline data analyst."));
    }
}
