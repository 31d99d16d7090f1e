//! JSON safety for floating-point aggregates.
//!
//! The API contract requires every non-finite floating-point value to reach
//! the client as `null`. `serde_json` guarantees exactly that: a non-finite
//! `f64` has no `Number` representation and serializes as `null`. Routing
//! all response serialization through [`to_json_safe`] makes the reliance
//! on that guarantee explicit, and the tests below pin it.

use serde::Serialize;

/// Serializes `value` to a JSON value in which any non-finite float has
/// become `null`.
///
/// # Errors
///
/// Returns a `serde_json` error if `value` cannot be represented as JSON
/// (e.g. a map with non-string keys).
pub fn to_json_safe<T: Serialize>(value: &T) -> Result<serde_json::Value, serde_json::Error> {
    serde_json::to_value(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Stats {
        mean: f64,
        label: String,
    }

    #[test]
    fn nan_becomes_null() {
        let value = to_json_safe(&Stats {
            mean: f64::NAN,
            label: "avg".to_string(),
        })
        .unwrap();
        assert!(value["mean"].is_null());
        assert_eq!(value["label"], "avg");
    }

    #[test]
    fn infinities_become_null() {
        let value = to_json_safe(&vec![f64::INFINITY, f64::NEG_INFINITY, 1.5]).unwrap();
        assert!(value[0].is_null());
        assert!(value[1].is_null());
        assert_eq!(value[2], 1.5);
    }

    #[test]
    fn finite_floats_survive() {
        let value = to_json_safe(&Stats {
            mean: 120.5,
            label: "avg".to_string(),
        })
        .unwrap();
        assert_eq!(value["mean"], 120.5);
    }
}
