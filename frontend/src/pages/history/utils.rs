use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

use crate::{
    api::{compat, ApiError, HistoryEntry},
    utils::time::short_time,
};

pub const ROLLING_DAYS: [u32; 5] = [7, 14, 30, 60, 90];

/// Upper bound the history endpoint accepts for `days`.
pub const MAX_LOOKBACK_DAYS: u32 = 365;

const MONTH_NAMES: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

/// Exactly one range is active at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryRange {
    LastDays(u32),
    Between { from: NaiveDate, to: NaiveDate },
    ThisMonth,
    LastMonth,
    All,
}

impl Default for HistoryRange {
    fn default() -> Self {
        Self::LastDays(30)
    }
}

impl HistoryRange {
    pub fn between(from: NaiveDate, to: NaiveDate) -> Result<Self, ApiError> {
        if from > to {
            return Err(ApiError::validation("Das Startdatum liegt nach dem Enddatum"));
        }
        Ok(Self::Between { from, to })
    }

    /// Inclusive calendar window; rolling and `All` ranges are bounded by the server.
    pub fn window(&self, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        match *self {
            Self::LastDays(_) | Self::All => None,
            Self::Between { from, to } => Some((from, to)),
            Self::ThisMonth => Some(month_span(today)),
            Self::LastMonth => Some(month_span(first_of_month(today) - Duration::days(1))),
        }
    }

    /// `reports/my/history` only knows a rolling `days` look-back, so every
    /// range asks for enough days to reach back to its start.
    pub fn query_params(&self, today: NaiveDate) -> Vec<(&'static str, String)> {
        let days = match (*self, self.window(today)) {
            (Self::LastDays(days), _) => days,
            (_, Some((start, _))) => ((today - start).num_days() + 1)
                .clamp(1, i64::from(MAX_LOOKBACK_DAYS)) as u32,
            (_, None) => MAX_LOOKBACK_DAYS,
        };
        vec![("days", days.to_string())]
    }

    /// Drops entries outside the calendar window.
    pub fn retain_window(&self, entries: &mut Vec<HistoryEntry>, today: NaiveDate) {
        if let Some((start, end)) = self.window(today) {
            entries.retain(|entry| entry.date >= start && entry.date <= end);
        }
    }

    pub fn label(&self, today: NaiveDate) -> String {
        match *self {
            Self::LastDays(days) => format!("Letzte {days} Tage"),
            Self::Between { from, to } => format!(
                "{} – {}",
                from.format("%d.%m.%Y"),
                to.format("%d.%m.%Y")
            ),
            Self::ThisMonth => month_label(today),
            Self::LastMonth => month_label(first_of_month(today) - Duration::days(1)),
            Self::All => "Gesamte Historie".to_string(),
        }
    }
}

fn first_of_month(day: NaiveDate) -> NaiveDate {
    day.with_day(1).unwrap_or(day)
}

fn month_span(day: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = first_of_month(day);
    let next = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    };
    let last = next.map(|next| next - Duration::days(1)).unwrap_or(first);
    (first, last)
}

fn month_label(day: NaiveDate) -> String {
    format!("{} {}", MONTH_NAMES[day.month0() as usize], day.year())
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HistoryTotals {
    pub hours: f64,
    pub amount: f64,
}

pub fn summarize(entries: &[HistoryEntry]) -> HistoryTotals {
    entries.iter().fold(HistoryTotals::default(), |acc, entry| HistoryTotals {
        hours: acc.hours + compat::effective_hours(entry),
        amount: acc.amount + compat::effective_amount(entry),
    })
}

/// `1234.5` as `"1.234,50 €"`.
pub fn format_currency(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    let euros = (cents / 100).to_string();
    let mut grouped = String::new();
    for (i, digit) in euros.chars().enumerate() {
        if i > 0 && (euros.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    format!("{sign}{grouped},{:02} €", cents % 100)
}

pub fn format_hours_decimal(hours: f64) -> String {
    format!("{hours:.2} h")
}

/// Server timestamps and plain times both display as `HH:MM`.
pub fn clock_time(raw: Option<&str>) -> Option<String> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    let parsed = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S"));
    Some(match parsed {
        Ok(stamp) => stamp.format("%H:%M").to_string(),
        Err(_) => short_time(raw),
    })
}

pub fn service_label(entry: &HistoryEntry) -> String {
    entry
        .service_type
        .clone()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| "Standard".to_string())
}

pub fn service_badge_class(service: &str) -> &'static str {
    match service {
        "Fensterreinigung" => "bg-status-info-bg text-status-info-text",
        "Grundreinigung" => "bg-status-success-bg text-status-success-text",
        "Unterhaltsreinigung" => "bg-status-warning-bg text-status-warning-text",
        _ => "bg-surface-muted text-fg-muted",
    }
}
