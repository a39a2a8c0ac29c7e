use crate::api::{ApiError, ObjectToday, WasPresentResponse};
use crate::utils::time::{format_hours, short_time};

pub const PRESENCE_BUTTON_LABEL: &str = "ICH WAR HEUTE ANWESEND";
pub const PRESENCE_FEEDBACK_MS: u32 = 3_000;

/// Notes sent with a check-in, naming the colleague when working in pairs.
pub fn check_in_notes(colleague: Option<&str>) -> String {
    match colleague.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => format!("Arbeitsbeginn (zu zweit mit {name})"),
        None => "Arbeitsbeginn".to_string(),
    }
}

/// Button text shown for a few seconds after "Ich war anwesend".
pub fn presence_feedback(result: &Result<WasPresentResponse, ApiError>) -> String {
    match result {
        Ok(response) => format!("✅ {}h gebucht!", trim_hours(response.scheduled_hours)),
        Err(err) if err.is_already_booked() => "❌ Bereits gebucht!".to_string(),
        Err(_) => "❌ Fehler!".to_string(),
    }
}

fn trim_hours(hours: f64) -> String {
    let rounded = (hours * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{rounded}")
    }
}

pub fn object_label(object: &ObjectToday) -> String {
    match (object.start_time.as_deref(), object.end_time.as_deref()) {
        (Some(start), Some(end)) => {
            format!("{} ({}–{})", object.name, short_time(start), short_time(end))
        }
        _ => object.name.clone(),
    }
}

pub fn planned_label(object: &ObjectToday) -> Option<String> {
    object
        .planned_hours
        .map(|hours| format!("Geplant: {}", format_hours(hours)))
}
