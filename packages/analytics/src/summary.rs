//! Dataset aggregation into a [`SummaryReport`].

use std::collections::HashMap;

use chrono::NaiveDate;
use fare_radar_analytics_models::{
    AirlineCo2Stat, AirlineFlightCount, AirlinePriceStat, ParseFailureCounts, PriceCo2Point,
    StopsCount, SummaryReport,
};
use fare_radar_flight_models::FlightRecord;

use crate::parse::{parse_co2, parse_duration, parse_price};

/// How many rows the cheapest-flights view returns.
const TOP_CHEAPEST_LEN: usize = 5;

/// How many rows the display sample contains.
const SAMPLE_LEN: usize = 5;

/// Computes every aggregate view over `records`.
///
/// Views are independent: each excludes only the rows whose own relevant
/// field failed to parse, so a row with an unparseable price still counts
/// in the duration and CO2 views. Unparseable values are never treated as
/// zero. The computation is deterministic: running it twice over the same
/// records yields an identical report.
#[must_use]
pub fn summarize(records: &[FlightRecord]) -> SummaryReport {
    let prices: Vec<Option<f64>> = records.iter().map(|r| parse_price(&r.price)).collect();
    let durations: Vec<Option<u32>> = records.iter().map(|r| parse_duration(&r.duration)).collect();
    let co2s: Vec<Option<f64>> = records.iter().map(|r| parse_co2(&r.co2_emissions)).collect();

    let parse_failures = ParseFailureCounts {
        price: count_missing(&prices),
        duration: count_missing(&durations),
        co2: count_missing(&co2s),
    };

    let price_hist: Vec<f64> = prices.iter().filter_map(|p| *p).collect();
    let duration_hist: Vec<u32> = durations.iter().filter_map(|d| *d).collect();

    let price_vs_co2: Vec<PriceCo2Point> = prices
        .iter()
        .zip(&co2s)
        .filter_map(|(price, co2)| {
            Some(PriceCo2Point {
                price: (*price)?,
                co2: (*co2)?,
            })
        })
        .collect();

    SummaryReport {
        top_airlines: top_airlines(records, &prices),
        price_hist,
        duration_hist,
        co2_by_airline: co2_by_airline(records, &co2s),
        flights_per_airline: flights_per_airline(records),
        stops_count: stops_count(records),
        price_vs_co2,
        earliest_flight: records.first().cloned(),
        latest_flight: records.last().cloned(),
        top_cheapest: top_cheapest(records, &prices),
        total_flights: records.len() as u64,
        sample_data: records.iter().take(SAMPLE_LEN).cloned().collect(),
        all_flights: records.to_vec(),
        busiest_day: busiest_day(records),
        parse_failures,
    }
}

fn count_missing<T>(values: &[Option<T>]) -> u64 {
    values.iter().filter(|v| v.is_none()).count() as u64
}

/// Groups `values` by airline, in first-seen airline order. Rows whose value
/// is `None` are skipped entirely; they neither create nor join a group.
fn group_by_airline(records: &[FlightRecord], values: &[Option<f64>]) -> Vec<(String, Vec<f64>)> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<f64>> = HashMap::new();

    for (record, value) in records.iter().zip(values) {
        let Some(value) = value else { continue };
        groups
            .entry(record.airline.clone())
            .or_insert_with(|| {
                order.push(record.airline.clone());
                Vec::new()
            })
            .push(*value);
    }

    order
        .into_iter()
        .map(|airline| {
            let values = groups.remove(&airline).unwrap_or_default();
            (airline, values)
        })
        .collect()
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Mean valid price per airline, ascending by mean (cheapest average
/// first). Airlines with zero valid-price rows are excluded, not
/// zero-filled.
fn top_airlines(records: &[FlightRecord], prices: &[Option<f64>]) -> Vec<AirlinePriceStat> {
    let mut stats: Vec<AirlinePriceStat> = group_by_airline(records, prices)
        .into_iter()
        .map(|(airline, values)| AirlinePriceStat {
            airline,
            avg_price: mean(&values),
        })
        .collect();
    stats.sort_by(|a, b| a.avg_price.total_cmp(&b.avg_price));
    stats
}

/// Mean valid CO2 per airline, in first-seen airline order.
fn co2_by_airline(records: &[FlightRecord], co2s: &[Option<f64>]) -> Vec<AirlineCo2Stat> {
    group_by_airline(records, co2s)
        .into_iter()
        .map(|(airline, values)| AirlineCo2Stat {
            airline,
            avg_co2: mean(&values),
        })
        .collect()
}

/// Row count per airline value, including rows whose other fields failed to
/// parse. First-seen order; the caller may sort.
fn flights_per_airline(records: &[FlightRecord]) -> Vec<AirlineFlightCount> {
    count_occurrences(records.iter().map(|r| r.airline.as_str()))
        .into_iter()
        .map(|(airline, count)| AirlineFlightCount { airline, count })
        .collect()
}

/// Frequency count per distinct stops-descriptor text, first-seen order.
fn stops_count(records: &[FlightRecord]) -> Vec<StopsCount> {
    count_occurrences(records.iter().map(|r| r.stops.as_str()))
        .into_iter()
        .map(|(stops, count)| StopsCount { stops, count })
        .collect()
}

fn count_occurrences<'a>(keys: impl Iterator<Item = &'a str>) -> Vec<(String, u64)> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, u64> = HashMap::new();

    for key in keys {
        if let Some(count) = counts.get_mut(key) {
            *count += 1;
        } else {
            counts.insert(key.to_string(), 1);
            order.push(key.to_string());
        }
    }

    order
        .into_iter()
        .map(|key| {
            let count = counts.get(&key).copied().unwrap_or_default();
            (key, count)
        })
        .collect()
}

/// The five rows with the lowest valid price; ties keep dataset order.
fn top_cheapest(records: &[FlightRecord], prices: &[Option<f64>]) -> Vec<FlightRecord> {
    let mut priced: Vec<(f64, &FlightRecord)> = records
        .iter()
        .zip(prices)
        .filter_map(|(record, price)| price.map(|p| (p, record)))
        .collect();
    priced.sort_by(|a, b| a.0.total_cmp(&b.0));
    priced
        .into_iter()
        .take(TOP_CHEAPEST_LEN)
        .map(|(_, record)| record.clone())
        .collect()
}

/// The date occurring most often among date-tagged rows. Ties break to the
/// earliest date so the result is deterministic.
fn busiest_day(records: &[FlightRecord]) -> Option<NaiveDate> {
    let mut counts: HashMap<NaiveDate, u64> = HashMap::new();
    for record in records {
        if let Some(date) = record.date {
            *counts.entry(date).or_default() += 1;
        }
    }
    counts
        .into_iter()
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)))
        .map(|(date, _)| date)
}
