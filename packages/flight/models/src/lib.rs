#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Flight record types shared across the fare radar pipeline.
//!
//! A [`FlightRecord`] is one scraped flight-search result row. Every field
//! originates as free-form page text; numeric interpretation (price,
//! duration, CO2) happens downstream in the analytics crate and may fail
//! per-field without invalidating the record.
//!
//! The serde renames define the CSV column contract. The column names match
//! the datasets produced by the original collection tooling, so previously
//! scraped files read back without migration.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used for search queries and the CSV `Date` column.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Placeholder stored when a page element was missing during extraction.
pub const MISSING_FIELD: &str = "N/A";

/// One scraped flight-search result row.
///
/// Immutable after creation; the only mutation is tagging a record with the
/// calendar date it was scraped for when collected over a date range (see
/// [`FlightRecord::with_date`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightRecord {
    /// Departure time as displayed on the results page.
    #[serde(rename = "Departure Time")]
    pub departure_time: String,
    /// Arrival time as displayed on the results page.
    #[serde(rename = "Arrival Time")]
    pub arrival_time: String,
    /// Operating airline name.
    #[serde(rename = "Airline Company")]
    pub airline: String,
    /// Total flight duration text, e.g. `"1 hr 25 min"`.
    #[serde(rename = "Flight Duration")]
    pub duration: String,
    /// Stop-count descriptor, e.g. `"Nonstop"` or `"1 stop"`.
    #[serde(rename = "Stops")]
    pub stops: String,
    /// Price text including currency symbol, e.g. `"$123"`.
    #[serde(rename = "Price")]
    pub price: String,
    /// CO2 estimate text, e.g. `"104 kg CO2e"`.
    #[serde(rename = "co2 emissions")]
    pub co2_emissions: String,
    /// Emissions variation relative to the route average, e.g. `"-12%"`.
    #[serde(rename = "emissions variation")]
    pub emissions_variation: String,
    /// Calendar date the record was scraped for. Absent on single-page
    /// extractions; tagged during multi-day collection.
    #[serde(rename = "Date", default)]
    pub date: Option<NaiveDate>,
}

impl FlightRecord {
    /// Returns this record tagged with the calendar date it was scraped for.
    #[must_use]
    pub const fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> FlightRecord {
        FlightRecord {
            departure_time: "6:00 AM".to_string(),
            arrival_time: "7:30 AM".to_string(),
            airline: "United".to_string(),
            duration: "1 hr 30 min".to_string(),
            stops: "Nonstop".to_string(),
            price: "$120".to_string(),
            co2_emissions: "98 kg CO2e".to_string(),
            emissions_variation: "-5%".to_string(),
            date: None,
        }
    }

    #[test]
    fn with_date_tags_record() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 25).unwrap();
        let tagged = record().with_date(date);
        assert_eq!(tagged.date, Some(date));
    }

    #[test]
    fn json_uses_original_column_names() {
        let json = serde_json::to_value(record()).unwrap();
        assert_eq!(json["Airline Company"], "United");
        assert_eq!(json["co2 emissions"], "98 kg CO2e");
        assert!(json["Date"].is_null());
    }
}
