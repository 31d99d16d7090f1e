//! Search URL construction.
//!
//! The results page encodes the whole itinerary in a single `tfs` query
//! parameter: a binary message holding the date and the two airport codes,
//! base64-encoded, with a run of `_` padding spliced in near the end. The
//! byte layout is the target site's wire format, reproduced verbatim; it is
//! not interpreted anywhere else in the pipeline.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use chrono::NaiveDate;
use fare_radar_flight_models::DATE_FORMAT;

/// Number of `_` characters spliced into the encoded itinerary.
const PAD_RUN: usize = 7;

/// How far from the end of the encoded string the padding is inserted.
const PAD_OFFSET_FROM_END: usize = 6;

/// Builds the one-way search URL for a single itinerary day.
#[must_use]
pub fn build_search_url(origin: &str, destination: &str, date: NaiveDate) -> String {
    let date_text = date.format(DATE_FORMAT).to_string();
    let encoded = STANDARD.encode(itinerary_bytes(origin, destination, &date_text));
    let padded = splice_padding(&encoded);
    format!("https://www.google.com/travel/flights/search?tfs={padded}")
}

/// Assembles the binary itinerary message for a one-way flight.
fn itinerary_bytes(origin: &str, destination: &str, date: &str) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"\x08\x1c\x10\x02\x1a\x1e\x12\n");
    bytes.extend_from_slice(date.as_bytes());
    bytes.extend_from_slice(b"j\x07\x08\x01\x12\x03");
    bytes.extend_from_slice(origin.as_bytes());
    bytes.extend_from_slice(b"r\x07\x08\x01\x12\x03");
    bytes.extend_from_slice(destination.as_bytes());
    bytes.extend_from_slice(b"@\x01H\x01p\x01\x82\x01\x0b\x08\xfc\x06`\x04\x08");
    bytes
}

/// Inserts the `_` run at the position the target site expects.
fn splice_padding(encoded: &str) -> String {
    let insert_at = encoded.len().saturating_sub(PAD_OFFSET_FROM_END);
    let mut padded = String::with_capacity(encoded.len() + PAD_RUN);
    padded.push_str(&encoded[..insert_at]);
    padded.push_str(&"_".repeat(PAD_RUN));
    padded.push_str(&encoded[insert_at..]);
    padded
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 25).unwrap()
    }

    #[test]
    fn url_targets_the_search_endpoint() {
        let url = build_search_url("SFO", "LAX", date());
        assert!(url.starts_with("https://www.google.com/travel/flights/search?tfs="));
    }

    #[test]
    fn encoded_key_contains_padding_run() {
        let url = build_search_url("SFO", "LAX", date());
        assert!(url.contains("_______"));
    }

    #[test]
    fn padding_sits_six_chars_from_the_end() {
        let url = build_search_url("SFO", "LAX", date());
        let key = url.rsplit_once("tfs=").unwrap().1;
        let tail = &key[key.len() - PAD_OFFSET_FROM_END - PAD_RUN..];
        assert!(tail.starts_with("_______"));
        assert!(!tail.ends_with('_'));
    }

    #[test]
    fn itinerary_embeds_date_and_airports() {
        let bytes = itinerary_bytes("SFO", "LAX", "2025-07-25");
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("2025-07-25"));
        assert!(text.contains("SFO"));
        assert!(text.contains("LAX"));
    }

    #[test]
    fn different_dates_produce_different_keys() {
        let a = build_search_url("SFO", "LAX", date());
        let b = build_search_url("SFO", "LAX", date().succ_opt().unwrap());
        assert_ne!(a, b);
    }
}
