use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;

use crate::config;

pub const WEEKDAY_NAMES: [&str; 7] = [
    "Montag",
    "Dienstag",
    "Mittwoch",
    "Donnerstag",
    "Freitag",
    "Samstag",
    "Sonntag",
];

fn app_time_zone() -> Tz {
    config::current_time_zone()
}

pub fn now_in_app_tz() -> DateTime<Tz> {
    Utc::now().with_timezone(&app_time_zone())
}

pub fn today_in_app_tz() -> NaiveDate {
    now_in_app_tz().date_naive()
}

/// Monday of the week `offset` weeks away from the week containing `today`.
pub fn week_monday(today: NaiveDate, offset: i32) -> NaiveDate {
    let monday = today - Duration::days(i64::from(today.weekday().num_days_from_monday()));
    monday + Duration::weeks(i64::from(offset))
}

/// `HH:MM` (or `HH:MM:SS`) into hours and minutes.
pub fn parse_hhmm(raw: &str) -> Option<(u32, u32)> {
    let raw = raw.trim();
    let time = NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .ok()?;
    Some((chrono::Timelike::hour(&time), chrono::Timelike::minute(&time)))
}

/// Trims `HH:MM:SS` to `HH:MM` for display; anything else is returned as is.
pub fn short_time(raw: &str) -> String {
    match parse_hhmm(raw) {
        Some((h, m)) => format!("{:02}:{:02}", h, m),
        None => raw.to_string(),
    }
}

pub fn format_hms(total_seconds: i64) -> String {
    let total = total_seconds.max(0);
    format!(
        "{:02}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}

/// Decimal hours as `"7 Std 30 Min"`.
pub fn format_hours(hours: f64) -> String {
    if !hours.is_finite() || hours <= 0.0 {
        return "0 Min".to_string();
    }
    let total_minutes = (hours * 60.0).round() as i64;
    let (h, m) = (total_minutes / 60, total_minutes % 60);
    match (h, m) {
        (0, m) => format!("{m} Min"),
        (h, 0) => format!("{h} Std"),
        (h, m) => format!("{h} Std {m} Min"),
    }
}

pub fn format_date_de(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

pub fn weekday_name(index: u32) -> &'static str {
    WEEKDAY_NAMES.get(index as usize).copied().unwrap_or("")
}
