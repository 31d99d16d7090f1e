//! Parsers for raw scraped text fields.
//!
//! Each parser takes one raw text value and returns either a typed numeric
//! value or `None`, never an error and never a panic. Fully non-numeric text
//! (a literal `"N/A"`, an empty cell) resolves to `None` in every parser,
//! distinct from zero.

use std::sync::LazyLock;

use regex::Regex;

/// `"<N> hr"` optionally followed by `" <M> min"`. Hours with no minutes
/// clause implies zero minutes.
static HOURS_MINUTES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+) hr(?: (\d+) min)?").expect("valid regex"));

/// Bare `"<M> min"`.
static MINUTES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+) min").expect("valid regex"));

/// Parses price text like `"$1,234.56"` into a float.
///
/// Strips every character that is not an ASCII digit or a decimal point; an
/// empty or bare-`.` remainder, or one that still fails float parsing
/// (e.g. `"1.2.3"`), yields `None`.
#[must_use]
pub fn parse_price(raw: &str) -> Option<f64> {
    parse_numeric(raw)
}

/// Parses CO2 text like `"104 kg CO2e"` into a float.
///
/// Same stripping rule and no-value conditions as [`parse_price`].
#[must_use]
pub fn parse_co2(raw: &str) -> Option<f64> {
    parse_numeric(raw)
}

fn parse_numeric(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if cleaned.is_empty() || cleaned == "." {
        return None;
    }
    cleaned.parse().ok()
}

/// Converts duration text like `"1 hr 25 min"` or `"45 min"` to total
/// minutes. Any other text yields `None`.
#[must_use]
pub fn parse_duration(raw: &str) -> Option<u32> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }

    if let Some(captures) = HOURS_MINUTES_RE.captures(text) {
        let hours: u32 = captures.get(1)?.as_str().parse().ok()?;
        let minutes: u32 = captures
            .get(2)
            .map_or(Some(0), |m| m.as_str().parse().ok())?;
        return Some(hours * 60 + minutes);
    }

    if let Some(captures) = MINUTES_RE.captures(text) {
        return captures.get(1)?.as_str().parse().ok();
    }

    None
}
