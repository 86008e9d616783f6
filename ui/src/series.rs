//! Series normalization: date-keyed productivity values into an ordered,
//! typed sequence of [`SeriesPoint`]s.
//!
//! The series endpoint has shipped two payload shapes for each date entry:
//!
//! ```text
//! { "2024-06-07": 3.2 }                                        (legacy)
//! { "2024-06-07": { "value": 3.2, "percent_change": -1.5 } }  (canonical)
//! ```
//!
//! Both decode through [`SeriesEntry`]; everything past this boundary only
//! sees the canonical point type.

use serde::Deserialize;
use thiserror::Error;
use time::{macros::format_description, Date, Weekday};

#[derive(Debug, Error)]
pub enum SeriesError {
    #[error("invalid series date {key:?}: {source}")]
    InvalidDate {
        key: String,
        #[source]
        source: time::error::Parse,
    },
}

/// One date entry as delivered by the endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SeriesEntry {
    Detailed {
        value: f64,
        #[serde(default)]
        percent_change: Option<f64>,
    },
    /// Bare number. Deprecated; older backends still send it.
    Legacy(f64),
}

impl SeriesEntry {
    pub fn value(&self) -> f64 {
        match *self {
            Self::Detailed { value, .. } | Self::Legacy(value) => value,
        }
    }

    pub fn percent_change(&self) -> Option<f64> {
        match *self {
            Self::Detailed { percent_change, .. } => percent_change,
            Self::Legacy(_) => None,
        }
    }

    pub fn is_legacy(&self) -> bool {
        matches!(self, Self::Legacy(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub date: Date,
    pub value: f64,
    pub percent_change: Option<f64>,
    /// 0 = Sunday .. 6 = Saturday.
    pub day_of_week: u8,
}

impl SeriesPoint {
    pub fn new(date: Date, value: f64, percent_change: Option<f64>) -> Self {
        Self {
            date,
            value,
            percent_change,
            day_of_week: date.weekday().number_days_from_sunday(),
        }
    }

    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// `YYYY-MM-DD`, the identity key of the point.
    pub fn date_key(&self) -> String {
        format_date_key(self.date)
    }

    /// Localized weekday name.
    pub fn day_name(&self) -> String {
        crate::i18n::weekday_name(self.weekday())
    }
}

pub fn parse_date_key(key: &str) -> Result<Date, SeriesError> {
    Date::parse(key.trim(), &format_description!("[year]-[month]-[day]")).map_err(|source| {
        SeriesError::InvalidDate {
            key: key.to_string(),
            source,
        }
    })
}

pub fn format_date_key(date: Date) -> String {
    date.format(&format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| date.to_string())
}

/// Turn raw `(date key, entry)` pairs into points sorted ascending by date.
///
/// Input order is irrelevant; JSON objects carry no ordering guarantee.
pub fn normalize<I, K>(entries: I) -> Result<Vec<SeriesPoint>, SeriesError>
where
    I: IntoIterator<Item = (K, SeriesEntry)>,
    K: AsRef<str>,
{
    let mut legacy_entries = 0usize;
    let mut points = entries
        .into_iter()
        .map(|(key, entry)| {
            if entry.is_legacy() {
                legacy_entries += 1;
            }
            let date = parse_date_key(key.as_ref())?;
            Ok(SeriesPoint::new(date, entry.value(), entry.percent_change()))
        })
        .collect::<Result<Vec<_>, SeriesError>>()?;

    if legacy_entries > 0 {
        tracing::warn!(
            "series payload used the deprecated bare-number shape for {legacy_entries} entries"
        );
    }

    points.sort_by_key(|point| point.date);
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn detailed(value: f64, percent_change: f64) -> SeriesEntry {
        SeriesEntry::Detailed {
            value,
            percent_change: Some(percent_change),
        }
    }

    #[test]
    fn sorts_regardless_of_input_order() {
        let points = normalize([
            ("2024-06-07", SeriesEntry::Legacy(1.0)),
            ("2024-05-31", SeriesEntry::Legacy(2.0)),
            ("2024-06-03", SeriesEntry::Legacy(3.0)),
            ("2023-12-31", SeriesEntry::Legacy(4.0)),
        ])
        .expect("valid series");

        let keys: Vec<_> = points.iter().map(SeriesPoint::date_key).collect();
        assert_eq!(
            keys,
            ["2023-12-31", "2024-05-31", "2024-06-03", "2024-06-07"]
        );
        assert!(points.windows(2).all(|pair| pair[0].date <= pair[1].date));
    }

    #[test]
    fn day_of_week_counts_from_sunday() {
        let points = normalize([
            ("2024-06-07", detailed(1.0, 0.0)),
            ("2024-06-09", detailed(1.0, 0.0)),
        ])
        .expect("valid series");
        assert_eq!(points[0].day_of_week, 5);
        assert_eq!(points[0].weekday(), Weekday::Friday);
        assert_eq!(points[1].day_of_week, 0);
    }

    #[test]
    fn keeps_percent_change_only_for_detailed_entries() {
        let points = normalize([
            ("2024-06-01", detailed(3.2, -1.5)),
            ("2024-06-02", SeriesEntry::Legacy(4.0)),
        ])
        .expect("valid series");
        assert_eq!(points[0].percent_change, Some(-1.5));
        assert_eq!(points[1].percent_change, None);
        assert_eq!(points[1].value, 4.0);
    }

    #[test]
    fn rejects_malformed_date_keys() {
        let err = normalize([("2024-13-01", SeriesEntry::Legacy(1.0))]).unwrap_err();
        assert!(matches!(err, SeriesError::InvalidDate { ref key, .. } if key == "2024-13-01"));
    }

    #[test]
    fn date_key_round_trips_padding() {
        assert_eq!(format_date_key(date!(2024 - 01 - 05)), "2024-01-05");
        assert_eq!(parse_date_key("2024-01-05").unwrap(), date!(2024 - 01 - 05));
    }

    #[test]
    fn empty_input_is_empty_series() {
        let points = normalize(Vec::<(String, SeriesEntry)>::new()).expect("empty ok");
        assert!(points.is_empty());
    }
}
