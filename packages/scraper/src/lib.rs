#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Flight results page scraper and date-range collector.
//!
//! [`url`] builds the search URL for one itinerary day, [`extract`] pulls
//! flight rows out of a results page via CSS selectors, and [`collect`]
//! drives the per-day loop over a date range and assembles the dataset.
//!
//! The scraping is selector-coupled to one page layout and inherently
//! brittle; the rest of the pipeline only depends on the contract "given a
//! list of extracted text rows, produce a dataset", independent of how the
//! rows were obtained.

pub mod collect;
pub mod extract;
pub mod url;

/// Errors that can occur during scraping operations.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    /// An HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Parsing the response body failed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Writing the collected dataset failed.
    #[error("Dataset error: {0}")]
    Dataset(#[from] fare_radar_dataset::DatasetError),

    /// The requested date range is invalid.
    #[error("Invalid date range: {message}")]
    InvalidRange {
        /// Description of what is wrong with the range.
        message: String,
    },
}

/// Builds the HTTP client used for page fetches.
///
/// The results page serves a degraded document to clients without a
/// browser-like User-Agent, so one is always set.
///
/// # Errors
///
/// Returns [`ScrapeError`] if the client cannot be constructed.
pub fn build_client() -> Result<reqwest::Client, ScrapeError> {
    reqwest::Client::builder()
        .user_agent(
            "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) \
             Chrome/126.0.0.0 Safari/537.36",
        )
        .build()
        .map_err(ScrapeError::Http)
}
