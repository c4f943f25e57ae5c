//! Lenient calendar-date decoding for upstream records.
//!
//! The upstream API sends service dates either as `YYYY-MM-DD` or as a full
//! timestamp. Only the calendar date is kept; a timestamp's offset is not
//! applied, so `2026-10-17T23:30:00-05:00` stays on the 17th.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Calendar date of a `YYYY-MM-DD`, RFC 3339, or naive date-time string.
pub fn parse_service_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(value) {
        return Some(stamp.date_naive());
    }
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|stamp| stamp.date())
}

/// `deserialize_with` helper for optional dates. Null and `""` decode to `None`.
pub fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => parse_service_date(&raw)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid date '{}'", raw))),
    }
}

/// `deserialize_with` helper for required dates.
pub fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    parse_service_date(&raw).ok_or_else(|| D::Error::custom(format!("invalid date '{}'", raw)))
}
