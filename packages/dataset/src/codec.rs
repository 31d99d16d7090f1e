//! CSV encoding and decoding of flight records.
//!
//! Writing cleans each text field of the mojibake artifacts the results page
//! leaks into scraped text (stray `Â`/`Ã` bytes, non-breaking spaces) before
//! encoding. Reading skips rows that fail to decode rather than aborting the
//! whole file; one bad row does not void the dataset.

use std::io;

use fare_radar_flight_models::FlightRecord;

use crate::DatasetError;

/// Writes records as CSV: header row first, then one row per record.
///
/// # Errors
///
/// Returns [`DatasetError`] if encoding or the underlying writer fails.
pub fn write_records<W: io::Write>(writer: W, records: &[FlightRecord]) -> Result<(), DatasetError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer.serialize(clean_record(record))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Serializes records to an in-memory CSV string.
///
/// Used to hand a capped sample of the dataset to the narrative summarizer
/// as text.
///
/// # Errors
///
/// Returns [`DatasetError`] if encoding fails.
pub fn to_csv_string(records: &[FlightRecord]) -> Result<String, DatasetError> {
    let mut buffer = Vec::new();
    write_records(&mut buffer, records)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Reads all records from CSV input.
///
/// Rows that fail to decode are logged and skipped; the remainder of the
/// file is still returned in file order.
///
/// # Errors
///
/// Returns [`DatasetError`] if the underlying reader fails before any rows
/// can be examined (e.g. an unreadable header row).
pub fn read_records<R: io::Read>(reader: R) -> Result<Vec<FlightRecord>, DatasetError> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let mut records = Vec::new();
    for (index, result) in csv_reader.deserialize::<FlightRecord>().enumerate() {
        match result {
            Ok(record) => records.push(record),
            Err(e) => log::warn!("Skipping unreadable CSV row {}: {e}", index + 1),
        }
    }
    Ok(records)
}

/// Returns a copy of the record with every text field cleaned.
fn clean_record(record: &FlightRecord) -> FlightRecord {
    FlightRecord {
        departure_time: clean_text(&record.departure_time),
        arrival_time: clean_text(&record.arrival_time),
        airline: clean_text(&record.airline),
        duration: clean_text(&record.duration),
        stops: clean_text(&record.stops),
        price: clean_text(&record.price),
        co2_emissions: clean_text(&record.co2_emissions),
        emissions_variation: clean_text(&record.emissions_variation),
        date: record.date,
    }
}

/// Strips the unwanted characters the results page leaks into scraped text.
///
/// The page intersperses non-breaking spaces and, when the response is
/// decoded with the wrong charset, stray `Â`/`Ã`/`¶` bytes. Non-breaking
/// spaces become regular spaces so duration text like `"1 hr 25 min"`
/// keeps its word boundaries.
#[must_use]
pub fn clean_text(value: &str) -> String {
    value
        .replace('\u{a0}', " ")
        .replace(['Â', 'Ã', '¶'], "")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn record(airline: &str, price: &str, date: Option<NaiveDate>) -> FlightRecord {
        FlightRecord {
            departure_time: "6:00 AM".to_string(),
            arrival_time: "9:15 AM".to_string(),
            airline: airline.to_string(),
            duration: "3 hr 15 min".to_string(),
            stops: "Nonstop".to_string(),
            price: price.to_string(),
            co2_emissions: "210 kg CO2e".to_string(),
            emissions_variation: "+4%".to_string(),
            date,
        }
    }

    #[test]
    fn round_trips_records_in_order() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 25).unwrap();
        let records = vec![
            record("United", "$120", Some(date)),
            record("Delta", "$95", None),
        ];

        let csv_text = to_csv_string(&records).unwrap();
        let decoded = read_records(csv_text.as_bytes()).unwrap();

        assert_eq!(decoded, records);
    }

    #[test]
    fn header_uses_original_column_order() {
        let csv_text = to_csv_string(&[record("United", "$120", None)]).unwrap();
        let header = csv_text.lines().next().unwrap();
        assert_eq!(
            header,
            "Departure Time,Arrival Time,Airline Company,Flight Duration,\
             Stops,Price,co2 emissions,emissions variation,Date"
        );
    }

    #[test]
    fn cleans_scraped_text_on_write() {
        let mut dirty = record("ÂUnited", "$120", None);
        dirty.duration = "3\u{a0}hr\u{a0}15\u{a0}min".to_string();

        let csv_text = to_csv_string(&[dirty]).unwrap();
        let decoded = read_records(csv_text.as_bytes()).unwrap();

        assert_eq!(decoded[0].airline, "United");
        assert_eq!(decoded[0].duration, "3 hr 15 min");
    }

    #[test]
    fn skips_unreadable_rows() {
        let csv_text = "Departure Time,Arrival Time,Airline Company,Flight Duration,\
                        Stops,Price,co2 emissions,emissions variation,Date\n\
                        6:00 AM,9:15 AM,United,3 hr 15 min,Nonstop,$120,210 kg CO2e,+4%,2025-07-25\n\
                        6:00 AM,9:15 AM,Delta,3 hr,Nonstop,$95,200 kg CO2e,-2%,not-a-date\n";

        let decoded = read_records(csv_text.as_bytes()).unwrap();

        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].airline, "United");
    }

    #[test]
    fn reads_legacy_files_without_date_column() {
        let csv_text = "Departure Time,Arrival Time,Airline Company,Flight Duration,\
                        Stops,Price,co2 emissions,emissions variation\n\
                        6:00 AM,9:15 AM,United,3 hr 15 min,Nonstop,$120,210 kg CO2e,+4%\n";

        let decoded = read_records(csv_text.as_bytes()).unwrap();

        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].date, None);
    }
}
