#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Summary report types computed over a flight dataset.
//!
//! A [`SummaryReport`] bundles independent views over one dataset. It is
//! recomputed on every analysis request and never persisted. Every numeric
//! view excludes records whose relevant field failed to parse: a row with
//! an unparseable price still counts in the duration and CO2 views when
//! those fields parsed. The [`SummaryReport::parse_failures`] counts make
//! those exclusions observable to callers.
//!
//! Field names here are the JSON API contract.

use chrono::NaiveDate;
use fare_radar_flight_models::FlightRecord;
use serde::{Deserialize, Serialize};

/// Mean price for one airline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirlinePriceStat {
    /// Airline name.
    pub airline: String,
    /// Mean of this airline's valid prices.
    pub avg_price: f64,
}

/// Mean CO2 estimate for one airline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirlineCo2Stat {
    /// Airline name.
    pub airline: String,
    /// Mean of this airline's valid CO2 values.
    pub avg_co2: f64,
}

/// Number of result rows for one airline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirlineFlightCount {
    /// Airline name.
    pub airline: String,
    /// Row count, including rows whose other fields failed to parse.
    pub count: u64,
}

/// Frequency of one stop-count descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopsCount {
    /// The descriptor text as scraped, e.g. `"Nonstop"`.
    pub stops: String,
    /// Number of rows carrying this descriptor.
    pub count: u64,
}

/// One row's (price, CO2) pair, present only when both fields parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceCo2Point {
    /// Parsed price.
    pub price: f64,
    /// Parsed CO2 estimate.
    pub co2: f64,
}

/// Per-field counts of rows excluded from numeric views because the field
/// failed to parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseFailureCounts {
    /// Rows with an unparseable price.
    pub price: u64,
    /// Rows with an unparseable duration.
    pub duration: u64,
    /// Rows with an unparseable CO2 estimate.
    pub co2: u64,
}

/// The bundle of aggregate views computed from one dataset on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    /// Airlines ranked by mean valid price, cheapest first. Airlines with
    /// no valid-price rows are excluded.
    pub top_airlines: Vec<AirlinePriceStat>,
    /// Every valid price, in dataset order, for external binning.
    pub price_hist: Vec<f64>,
    /// Every valid duration in minutes, in dataset order.
    pub duration_hist: Vec<u32>,
    /// Mean CO2 per airline. Airlines with no valid CO2 are excluded.
    pub co2_by_airline: Vec<AirlineCo2Stat>,
    /// Row count per airline, in first-seen order.
    pub flights_per_airline: Vec<AirlineFlightCount>,
    /// Frequency per distinct stops descriptor, in first-seen order.
    pub stops_count: Vec<StopsCount>,
    /// Rows where both price and CO2 parsed, projected to the value pair.
    pub price_vs_co2: Vec<PriceCo2Point>,
    /// The first row of the dataset in file order (not sorted by
    /// time-of-day).
    pub earliest_flight: Option<FlightRecord>,
    /// The last row of the dataset in file order (not sorted by
    /// time-of-day).
    pub latest_flight: Option<FlightRecord>,
    /// The five rows with the lowest valid price; ties keep dataset order.
    pub top_cheapest: Vec<FlightRecord>,
    /// Total number of rows in the dataset.
    pub total_flights: u64,
    /// The first five rows, for display.
    pub sample_data: Vec<FlightRecord>,
    /// Every row, for the full table view.
    pub all_flights: Vec<FlightRecord>,
    /// The date occurring most often among date-tagged rows; ties break to
    /// the earliest date.
    pub busiest_day: Option<NaiveDate>,
    /// How many rows were excluded from each numeric view.
    pub parse_failures: ParseFailureCounts,
}
