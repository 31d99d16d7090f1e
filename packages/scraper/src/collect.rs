//! Per-day collection over a date range.

use chrono::NaiveDate;
use fare_radar_flight_models::FlightRecord;

use crate::{ScrapeError, extract, url};

/// Collects flight rows for every calendar day in the inclusive range,
/// tagging each row with its date and concatenating days in ascending
/// order. Per-day scrape order is preserved.
///
/// A failed day is logged and skipped so one bad page does not void the
/// whole range; a day with zero result rows is simply an empty
/// contribution.
///
/// # Errors
///
/// Returns [`ScrapeError::InvalidRange`] if `start` is after `end`.
pub async fn collect_range(
    client: &reqwest::Client,
    origin: &str,
    destination: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<FlightRecord>, ScrapeError> {
    if start > end {
        return Err(ScrapeError::InvalidRange {
            message: format!("start date {start} is after end date {end}"),
        });
    }

    let mut all_rows = Vec::new();
    let mut date = start;
    while date <= end {
        log::info!("Scraping {origin} to {destination} for {date}...");
        match collect_day(client, origin, destination, date).await {
            Ok(rows) => {
                log::info!("{date}: {} flights", rows.len());
                all_rows.extend(rows.into_iter().map(|row| row.with_date(date)));
            }
            Err(e) => {
                log::warn!("Skipping {date}: {e}");
            }
        }
        date = match date.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }
    Ok(all_rows)
}

/// Fetches and extracts one day's results page.
///
/// # Errors
///
/// Returns [`ScrapeError`] if the fetch fails or the page cannot be
/// parsed.
pub async fn collect_day(
    client: &reqwest::Client,
    origin: &str,
    destination: &str,
    date: NaiveDate,
) -> Result<Vec<FlightRecord>, ScrapeError> {
    let search_url = url::build_search_url(origin, destination, date);
    let body = client
        .get(&search_url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    extract::extract_flights(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn rejects_inverted_range() {
        let client = crate::build_client().unwrap();
        let start = NaiveDate::from_ymd_opt(2025, 7, 26).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 7, 25).unwrap();

        let result = collect_range(&client, "SFO", "LAX", start, end).await;

        assert!(matches!(result, Err(ScrapeError::InvalidRange { .. })));
    }
}
