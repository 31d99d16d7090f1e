#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! API request and response types for the fare radar server.
//!
//! These types are serialized to JSON for the REST API. Field names are the
//! wire contract the dashboard frontend consumes.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/scrape`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeRequest {
    /// Origin airport code, e.g. `"SFO"`.
    pub origin: String,
    /// Destination airport code, e.g. `"LAX"`.
    pub destination: String,
    /// Inclusive range start, `YYYY-MM-DD`.
    pub start_date: String,
    /// Inclusive range end, `YYYY-MM-DD`.
    pub end_date: String,
    /// Requested output filename. Always normalized to the fixed dataset
    /// filename regardless of what is requested.
    pub filename: String,
}

/// Outcome of a scrape request, success or failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeOutcome {
    /// Human-readable status line.
    pub status: String,
    /// Captured process output: stdout on success, stderr or the failure
    /// description otherwise.
    pub details: String,
}

/// Response of `GET /api/dashboard`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiDashboard {
    /// Server status string.
    pub status: String,
    /// Whether a dataset file currently exists.
    pub data_available: bool,
    /// Path of the current dataset file.
    pub csv_path: String,
    /// The API endpoints this server exposes.
    pub endpoints: Vec<String>,
}

/// Response of `GET /api/ai-insight`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiInsightResponse {
    /// The narrative text, or the inline failure placeholder.
    pub ai_insights: String,
}

/// Structured error body returned with HTTP 200 when no dataset exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Human-readable error description.
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrape_request_uses_snake_case_fields() {
        let body = r#"{"origin":"SFO","destination":"LAX","start_date":"2025-07-25",
                       "end_date":"2025-07-26","filename":"my_data.csv"}"#;
        let request: ScrapeRequest = serde_json::from_str(body).unwrap();
        assert_eq!(request.origin, "SFO");
        assert_eq!(request.start_date, "2025-07-25");
        assert_eq!(request.filename, "my_data.csv");
    }
}
