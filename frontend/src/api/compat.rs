//! Workarounds for inconsistencies of the backend contract.
//!
//! Everything that papers over backend behaviour lives here so it can be
//! removed in one place once the backend is fixed.

use chrono::{DateTime, Duration, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer};

use super::types::{HistoryEntry, HistoryResponse};

/// Hours added to clock timestamps reported by the backend.
///
/// The backend stores naive UTC and the UI reads it as local wall time, which
/// is two hours behind in summer time. The fixed shift keeps the running
/// clock correct in summer and one hour ahead in winter.
pub const SERVER_CHECK_IN_SKEW_HOURS: i64 = 2;

/// Interprets a backend clock timestamp as app-local wall time and applies
/// [`SERVER_CHECK_IN_SKEW_HOURS`].
pub fn correct_server_timestamp(raw: NaiveDateTime, tz: Tz) -> DateTime<Utc> {
    let local = tz
        .from_local_datetime(&raw)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&raw));
    local + Duration::hours(SERVER_CHECK_IN_SKEW_HOURS)
}

fn parse_server_timestamp(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.naive_utc())
        })
}

pub fn deserialize_server_timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_server_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw}")))
}

pub fn deserialize_optional_server_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => parse_server_timestamp(&raw)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw}"))),
    }
}

/// Report endpoints answer either `{ "entries": [...] }` or a bare list.
#[derive(Deserialize)]
#[serde(untagged)]
enum HistoryPayload {
    Wrapped(HistoryResponse),
    Bare(Vec<HistoryEntry>),
}

pub fn parse_history_payload(value: serde_json::Value) -> Result<HistoryResponse, serde_json::Error> {
    Ok(match serde_json::from_value::<HistoryPayload>(value)? {
        HistoryPayload::Wrapped(response) => response,
        HistoryPayload::Bare(entries) => HistoryResponse {
            entries,
            ..HistoryResponse::default()
        },
    })
}

/// `hours`, then `total_hours`, then zero.
pub fn effective_hours(entry: &HistoryEntry) -> f64 {
    entry.hours.or(entry.total_hours).unwrap_or(0.0)
}

/// `amount`, then hours times `hourly_rate`, then zero.
pub fn effective_amount(entry: &HistoryEntry) -> f64 {
    entry
        .amount
        .or_else(|| entry.hourly_rate.map(|rate| effective_hours(entry) * rate))
        .unwrap_or(0.0)
}
