#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CSV dataset persistence for scraped flight records.
//!
//! One dataset is one CSV file: a header row plus one row per
//! [`FlightRecord`](fare_radar_flight_models::FlightRecord), columns in the
//! fixed order defined by the record's serde contract. Publication is an
//! atomic path swap (the new file is written to a temporary sibling and
//! renamed into place), so a concurrent reader sees either the old or the
//! new complete file, never a partial one.
//!
//! [`DatasetStore`] is the explicit "current dataset" handle shared by the
//! server and the scraper CLI, replacing any notion of process-global
//! mutable state.

pub mod codec;
mod store;

use std::path::PathBuf;

pub use store::DatasetStore;

/// Fixed output filename every scrape run publishes to, regardless of the
/// filename requested by the caller.
pub const DEFAULT_DATASET_FILENAME: &str = "flight_data.csv";

/// Errors that can occur reading or writing a dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV encoding or decoding failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Returns the directory datasets are stored in.
///
/// Resolved from the `FARE_RADAR_DATA_DIR` environment variable, falling
/// back to `data/csv_output` relative to the working directory. Both the
/// server and the scraper binary resolve through this function so they agree
/// on where the current dataset lives.
#[must_use]
pub fn default_data_dir() -> PathBuf {
    std::env::var("FARE_RADAR_DATA_DIR")
        .map_or_else(|_| PathBuf::from("data/csv_output"), PathBuf::from)
}
