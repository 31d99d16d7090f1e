//! Flight row extraction from a results page document.
//!
//! Each visible result is one "card" element; the eight data fields are
//! pulled out of the card with CSS selectors, serially, in display order.
//! A field whose element is missing yields the literal `"N/A"` rather than
//! failing the card; parse failures are resolved downstream, per field.

use fare_radar_flight_models::{FlightRecord, MISSING_FIELD};
use scraper::{ElementRef, Html, Selector};

use crate::ScrapeError;

/// CSS selector matching one result card.
pub const RESULT_CARD_SELECTOR: &str = ".pIav2d";

/// Extracts every flight row from a results page document.
///
/// Returns an empty list when the page contains no result cards; no
/// flights found (or a layout miss) is an empty contribution, not an
/// error.
///
/// # Errors
///
/// Returns [`ScrapeError::Parse`] if a CSS selector fails to parse.
pub fn extract_flights(html: &str) -> Result<Vec<FlightRecord>, ScrapeError> {
    let document = Html::parse_document(html);
    let card_selector = parse_selector(RESULT_CARD_SELECTOR)?;

    let mut flights = Vec::new();
    for card in document.select(&card_selector) {
        flights.push(extract_flight(card)?);
    }

    log::debug!("Extracted {} result cards", flights.len());
    Ok(flights)
}

/// Extracts all relevant fields from a single result card.
fn extract_flight(card: ElementRef<'_>) -> Result<FlightRecord, ScrapeError> {
    Ok(FlightRecord {
        departure_time: element_text(card, r#"span[aria-label*="Departure time"]"#)?,
        arrival_time: element_text(card, r#"span[aria-label*="Arrival time"]"#)?,
        airline: element_text(card, ".sSHqwe")?,
        duration: element_text(card, "div.gvkrdb")?,
        stops: element_text(card, "div.EfT7Ae span.ogfYpf")?,
        price: element_text(card, "div.FpEdX span")?,
        co2_emissions: element_text(card, "div.O7CXue")?,
        emissions_variation: element_text(card, "div.N6PNV")?,
        date: None,
    })
}

/// Returns the trimmed text of the first element matching `selector` inside
/// `card`, or `"N/A"` when no element matches.
fn element_text(card: ElementRef<'_>, selector: &str) -> Result<String, ScrapeError> {
    let selector = parse_selector(selector)?;
    Ok(card.select(&selector).next().map_or_else(
        || MISSING_FIELD.to_string(),
        |element| element.text().collect::<Vec<_>>().join("").trim().to_string(),
    ))
}

/// Parses a CSS selector string, returning a [`ScrapeError`] on failure.
fn parse_selector(selector: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(selector)
        .map_err(|e| ScrapeError::Parse(format!("invalid CSS selector '{selector}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: &str = r#"
        <li class="pIav2d">
          <span aria-label="Departure time: 6:00 AM.">6:00 AM</span>
          <span aria-label="Arrival time: 9:15 AM.">9:15 AM</span>
          <div class="sSHqwe">United</div>
          <div class="gvkrdb">3 hr 15 min</div>
          <div class="EfT7Ae"><span class="ogfYpf">Nonstop</span></div>
          <div class="FpEdX"><span>$120</span></div>
          <div class="O7CXue">210 kg CO2e</div>
          <div class="N6PNV">-5%</div>
        </li>"#;

    #[test]
    fn extracts_all_fields_from_a_card() {
        let html = format!("<html><body><ul>{CARD}</ul></body></html>");
        let flights = extract_flights(&html).unwrap();

        assert_eq!(flights.len(), 1);
        let flight = &flights[0];
        assert_eq!(flight.departure_time, "6:00 AM");
        assert_eq!(flight.arrival_time, "9:15 AM");
        assert_eq!(flight.airline, "United");
        assert_eq!(flight.duration, "3 hr 15 min");
        assert_eq!(flight.stops, "Nonstop");
        assert_eq!(flight.price, "$120");
        assert_eq!(flight.co2_emissions, "210 kg CO2e");
        assert_eq!(flight.emissions_variation, "-5%");
        assert_eq!(flight.date, None);
    }

    #[test]
    fn missing_elements_yield_the_placeholder() {
        let html = r#"<html><body><ul>
            <li class="pIav2d"><div class="sSHqwe">United</div></li>
        </ul></body></html>"#;

        let flights = extract_flights(html).unwrap();

        assert_eq!(flights.len(), 1);
        assert_eq!(flights[0].airline, "United");
        assert_eq!(flights[0].price, MISSING_FIELD);
        assert_eq!(flights[0].duration, MISSING_FIELD);
    }

    #[test]
    fn page_without_cards_yields_empty_list() {
        let flights = extract_flights("<html><body><p>No flights.</p></body></html>").unwrap();
        assert!(flights.is_empty());
    }

    #[test]
    fn extracts_cards_in_display_order() {
        let second = CARD.replace("United", "Delta").replace("$120", "$95");
        let html = format!("<html><body><ul>{CARD}{second}</ul></body></html>");

        let flights = extract_flights(&html).unwrap();

        assert_eq!(flights.len(), 2);
        assert_eq!(flights[0].airline, "United");
        assert_eq!(flights[1].airline, "Delta");
    }
}
