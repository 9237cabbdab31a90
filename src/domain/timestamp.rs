//! Wire format for UTC timestamps.
//!
//! Timestamps go out as naive ISO-8601 in UTC with microsecond precision
//! and no offset, e.g. `2024-03-09T14:05:07.000123`.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

const NAIVE_MICROS: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Render a UTC instant without its offset
pub fn format_naive_utc(at: &DateTime<Utc>) -> String {
    at.naive_utc().format(NAIVE_MICROS).to_string()
}

/// `#[serde(with = "...")]` adapter for `DateTime<Utc>` fields
pub mod naive_utc {
    use super::*;

    pub fn serialize<S>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_naive_utc(at))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| naive.and_utc())
            .map_err(serde::de::Error::custom)
    }
}
