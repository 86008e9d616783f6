//! JSON bodies returned by the productivity backend.

use std::collections::HashMap;

use serde::Deserialize;

use crate::series::{self, SeriesEntry, SeriesPoint};

use super::error::FetchError;

/// `GET /api/productivity` → `{"value": 0.042}` (a fraction, not a percentage).
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ProductivityResponse {
    pub value: f64,
}

impl ProductivityResponse {
    pub fn percent(&self) -> f64 {
        self.value * 100.0
    }
}

/// `GET /api/productivity_series` → `{"value": {"YYYY-MM-DD": entry, ...}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct SeriesResponse {
    pub value: HashMap<String, SeriesEntry>,
}

impl SeriesResponse {
    pub fn into_points(self) -> Result<Vec<SeriesPoint>, FetchError> {
        Ok(series::normalize(self.value)?)
    }
}

/// Productivity score in percentage points from a raw response body.
pub fn decode_productivity(bytes: &[u8]) -> Result<f64, FetchError> {
    let response: ProductivityResponse = serde_json::from_slice(bytes)?;
    Ok(response.percent())
}

/// Ordered series from a raw response body.
pub fn decode_series(bytes: &[u8]) -> Result<Vec<SeriesPoint>, FetchError> {
    let response: SeriesResponse = serde_json::from_slice(bytes)?;
    response.into_points()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn productivity_is_scaled_to_percent() {
        let body = json!({ "value": -0.173 }).to_string();
        let percent = decode_productivity(body.as_bytes()).expect("valid body");
        assert!((percent - -17.3).abs() < 1e-9);
    }

    #[test]
    fn both_series_shapes_decode_to_the_same_points() {
        let legacy = json!({ "value": { "2024-06-02": 4.0, "2024-06-01": 3.2 } }).to_string();
        let detailed = json!({
            "value": {
                "2024-06-02": { "value": 4.0, "percent_change": null },
                "2024-06-01": { "value": 3.2 }
            }
        })
        .to_string();

        let a = decode_series(legacy.as_bytes()).expect("legacy decodes");
        let b = decode_series(detailed.as_bytes()).expect("detailed decodes");
        assert_eq!(a, b);
        assert_eq!(a[0].date_key(), "2024-06-01");
    }

    #[test]
    fn detailed_shape_carries_percent_change() {
        let body = json!({
            "value": { "2024-06-07": { "value": 12.5, "percent_change": 2.25 } }
        })
        .to_string();
        let points = decode_series(body.as_bytes()).expect("valid body");
        assert_eq!(points[0].percent_change, Some(2.25));
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        let err = decode_series(b"{\"value\": [1, 2, 3]}").unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));

        let err = decode_productivity(b"<html>").unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn bad_date_key_is_a_series_error() {
        let body = json!({ "value": { "yesterday": 1.0 } }).to_string();
        let err = decode_series(body.as_bytes()).unwrap_err();
        assert!(matches!(err, FetchError::Series(_)));
    }
}
