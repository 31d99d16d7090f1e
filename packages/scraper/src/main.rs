#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the flight scraper.
//!
//! Collects flight results for each day in the requested range and
//! publishes them as one CSV dataset. The server invokes this binary as an
//! external process and returns its stdout to the API caller, so the
//! user-facing summary goes to stdout while diagnostics go through the
//! logger (stderr).

use chrono::NaiveDate;
use clap::Parser;
use fare_radar_dataset::{DEFAULT_DATASET_FILENAME, DatasetStore, default_data_dir};
use fare_radar_flight_models::DATE_FORMAT;

#[derive(Parser)]
#[command(name = "fare_radar_scraper", about = "Scrape flights for a date range")]
struct Cli {
    /// Origin airport code (e.g. "SFO")
    origin: String,
    /// Destination airport code (e.g. "LAX")
    destination: String,
    /// Start date (YYYY-MM-DD, inclusive)
    start_date: String,
    /// End date (YYYY-MM-DD, inclusive)
    end_date: String,
    /// CSV output filename inside the dataset directory
    #[arg(long, default_value = DEFAULT_DATASET_FILENAME)]
    filename: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let cli = Cli::parse();
    let start = parse_date(&cli.start_date)?;
    let end = parse_date(&cli.end_date)?;

    let client = fare_radar_scraper::build_client()?;
    let records =
        fare_radar_scraper::collect::collect_range(&client, &cli.origin, &cli.destination, start, end)
            .await?;

    let store = DatasetStore::new(default_data_dir());
    let path = store.publish(&records, &cli.filename)?;

    println!(
        "Scraped {} flights from {} to {} ({} through {})",
        records.len(),
        cli.origin,
        cli.destination,
        cli.start_date,
        cli.end_date,
    );
    println!("Saved to {}", path.display());
    Ok(())
}

fn parse_date(text: &str) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map_err(|e| format!("invalid date '{text}' (expected YYYY-MM-DD): {e}").into())
}
