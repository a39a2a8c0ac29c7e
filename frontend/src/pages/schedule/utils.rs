use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{
    api::{
        ApiError, ConflictPayload, QuickAssignRequest, ScheduleEmployee, ScheduleObject,
        ScheduledShift, ShiftStatus, ShiftUpdate, WeekSchedulePayload,
    },
    utils::time::{parse_hhmm, short_time, week_monday, WEEKDAY_NAMES},
};

pub const DEFAULT_SHIFT_START: &str = "06:00";
pub const DEFAULT_SHIFT_END: &str = "14:00";
pub const VISIBLE_CONFLICTS: usize = 3;

/// `(end_h - start_h) + (end_m - start_m) / 60`. No overnight wraparound,
/// an end before the start yields a negative preview.
pub fn planned_hours(start: &str, end: &str) -> Option<f64> {
    let (start_h, start_m) = parse_hhmm(start)?;
    let (end_h, end_m) = parse_hhmm(end)?;
    Some(
        (f64::from(end_h) - f64::from(start_h)) + (f64::from(end_m) - f64::from(start_m)) / 60.0,
    )
}

pub fn format_preview(hours: Option<f64>) -> String {
    match hours {
        Some(hours) => format!("{hours:.1}h"),
        None => "-".to_string(),
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DayView {
    pub date: NaiveDate,
    pub weekday_index: u32,
    pub weekday_name: String,
    pub shifts: Vec<ScheduledShift>,
}

/// A schedule week, always seven days from Monday to Sunday.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeekView {
    pub week_start: NaiveDate,
    pub week_number: u32,
    pub year: i32,
    pub days: Vec<DayView>,
    pub employees: Vec<ScheduleEmployee>,
    pub objects: Vec<ScheduleObject>,
}

impl WeekView {
    pub fn from_payload(payload: WeekSchedulePayload) -> Self {
        let week_start = week_monday(payload.week_start, 0);
        let mut days: Vec<DayView> = (0..7u32)
            .map(|index| DayView {
                date: week_start + Duration::days(i64::from(index)),
                weekday_index: index,
                weekday_name: WEEKDAY_NAMES[index as usize].to_string(),
                shifts: Vec::new(),
            })
            .collect();

        for day in payload.days {
            let offset = (day.date - week_start).num_days();
            let index = if (0..7).contains(&offset) {
                Some(offset as usize)
            } else {
                day.weekday_index.map(|i| i as usize).filter(|i| *i < 7)
            };
            match index {
                Some(index) => days[index].shifts.extend(day.schedules),
                None => log::warn!("schedule day {} outside of week {}", day.date, week_start),
            }
        }

        let iso = week_start.iso_week();
        Self {
            week_start,
            week_number: payload.week_number.unwrap_or_else(|| iso.week()),
            year: payload.year.unwrap_or_else(|| iso.year()),
            days,
            employees: payload.employees,
            objects: payload.objects,
        }
    }

    pub fn shift_count(&self) -> usize {
        self.days.iter().map(|day| day.shifts.len()).sum()
    }

    pub fn shift_summary(&self) -> String {
        match self.shift_count() {
            1 => "1 Schicht".to_string(),
            count => format!("{count} Schichten"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConflictKind {
    Overlap,
    Unassigned,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    pub kind: ConflictKind,
    pub label: String,
    pub weekday_label: String,
}

impl Conflict {
    pub fn from_payload(payload: &ConflictPayload) -> Self {
        let kind = match payload.kind.to_lowercase().as_str() {
            "zeitüberschneidung" | "overlap" => ConflictKind::Overlap,
            _ => ConflictKind::Unassigned,
        };
        let label = match kind {
            ConflictKind::Overlap => payload.employee.clone(),
            ConflictKind::Unassigned => payload.object.clone(),
        };
        Self {
            kind,
            label: label.unwrap_or_else(|| "Unbekannt".to_string()),
            weekday_label: payload.weekday.clone().unwrap_or_default(),
        }
    }

    pub fn describe(&self) -> String {
        match self.kind {
            ConflictKind::Overlap => {
                format!("{} hat überlappende Schichten am {}", self.label, self.weekday_label)
            }
            ConflictKind::Unassigned => {
                format!("{} hat keine Zuweisung am {}", self.label, self.weekday_label)
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConflictDisplay {
    pub total: usize,
    pub shown: Vec<String>,
    pub remaining: usize,
}

impl ConflictDisplay {
    pub fn remaining_label(&self) -> Option<String> {
        (self.remaining > 0).then(|| format!("… und {} weitere", self.remaining))
    }
}

/// First three conflicts verbatim plus a remainder count; `None` when empty.
pub fn conflict_display(conflicts: &[Conflict]) -> Option<ConflictDisplay> {
    if conflicts.is_empty() {
        return None;
    }
    Some(ConflictDisplay {
        total: conflicts.len(),
        shown: conflicts
            .iter()
            .take(VISIBLE_CONFLICTS)
            .map(Conflict::describe)
            .collect(),
        remaining: conflicts.len().saturating_sub(VISIBLE_CONFLICTS),
    })
}

pub fn status_class(status: ShiftStatus) -> &'static str {
    match status {
        ShiftStatus::Normal => "bg-status-success-bg border-status-success-border",
        ShiftStatus::Vacation => "bg-status-warning-bg border-status-warning-border",
        ShiftStatus::Sick => "bg-status-error-bg border-status-error-border",
        ShiftStatus::Substitution => "bg-status-info-bg border-status-info-border",
    }
}

pub fn status_icon(status: ShiftStatus) -> Option<&'static str> {
    match status {
        ShiftStatus::Normal => None,
        ShiftStatus::Vacation => Some("🏖️"),
        ShiftStatus::Sick => Some("🤒"),
        ShiftStatus::Substitution => Some("↔️"),
    }
}

pub fn substitution_note(shift: &ScheduledShift) -> Option<String> {
    shift
        .replacement_for
        .map(|employee_id| format!("Vertretung für MA-{employee_id}"))
}

pub fn copy_targets(week_offset: i32) -> [(i32, &'static str); 4] {
    [
        (week_offset + 1, "Nächste Woche"),
        (week_offset + 2, "In 2 Wochen"),
        (week_offset + 3, "In 3 Wochen"),
        (week_offset + 4, "In 4 Wochen"),
    ]
}

/// Monday dates of the source and target week, both relative to `today`.
pub fn copy_week_dates(today: NaiveDate, source_offset: i32, target_offset: i32) -> (NaiveDate, NaiveDate) {
    (week_monday(today, source_offset), week_monday(today, target_offset))
}

/// Form state of the add and edit dialogs.
#[derive(Clone, Debug, PartialEq)]
pub struct ShiftDraft {
    pub id: Option<i64>,
    pub weekday: u32,
    pub employee_id: Option<i64>,
    pub object_id: Option<i64>,
    pub start_time: String,
    pub end_time: String,
    pub status: ShiftStatus,
}

impl ShiftDraft {
    pub fn new_for(weekday: u32) -> Self {
        Self {
            id: None,
            weekday,
            employee_id: None,
            object_id: None,
            start_time: DEFAULT_SHIFT_START.to_string(),
            end_time: DEFAULT_SHIFT_END.to_string(),
            status: ShiftStatus::Normal,
        }
    }

    pub fn from_shift(shift: &ScheduledShift, weekday: u32) -> Self {
        Self {
            id: Some(shift.id),
            weekday,
            employee_id: Some(shift.employee_id),
            object_id: Some(shift.object_id),
            start_time: short_time(&shift.start_time),
            end_time: short_time(&shift.end_time),
            status: shift.status,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn preview(&self) -> Option<f64> {
        planned_hours(&self.start_time, &self.end_time)
    }

    fn validated(&self) -> Result<(i64, i64), ApiError> {
        let (Some(employee_id), Some(object_id)) = (self.employee_id, self.object_id) else {
            return Err(ApiError::validation("Bitte Mitarbeiter und Objekt auswählen"));
        };
        if parse_hhmm(&self.start_time).is_none() || parse_hhmm(&self.end_time).is_none() {
            return Err(ApiError::validation("Bitte gültige Uhrzeiten im Format HH:MM eingeben"));
        }
        Ok((employee_id, object_id))
    }

    /// New shifts are always created as `normal`.
    pub fn to_quick_assign(&self) -> Result<QuickAssignRequest, ApiError> {
        let (employee_id, object_id) = self.validated()?;
        Ok(QuickAssignRequest {
            employee_id,
            object_id,
            weekday: self.weekday,
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
            status: ShiftStatus::Normal,
        })
    }

    pub fn to_update(&self) -> Result<ShiftUpdate, ApiError> {
        let (employee_id, object_id) = self.validated()?;
        let id = self
            .id
            .ok_or_else(|| ApiError::validation("Schicht ohne ID kann nicht gespeichert werden"))?;
        Ok(ShiftUpdate {
            id,
            employee_id,
            object_id,
            weekday: self.weekday,
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
            planned_hours: self.preview().unwrap_or_default(),
            status: self.status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::WeekDayPayload;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn shift(id: i64) -> ScheduledShift {
        ScheduledShift {
            id,
            employee_id: 4,
            employee_name: "Ruza".into(),
            object_id: 5,
            object_name: "Lidl".into(),
            start_time: "06:00:00".into(),
            end_time: "14:00:00".into(),
            planned_hours: Some(8.0),
            status: ShiftStatus::Normal,
            replacement_for: None,
        }
    }

    fn conflict(kind: &str, n: usize) -> Conflict {
        Conflict::from_payload(&ConflictPayload {
            kind: kind.into(),
            employee: Some(format!("MA {n}")),
            object: Some(format!("Objekt {n}")),
            weekday: Some("Montag".into()),
            shift1: None,
            shift2: None,
        })
    }

    #[test]
    fn planned_hours_matches_known_previews() {
        assert_eq!(planned_hours("06:00", "14:00"), Some(8.0));
        assert_eq!(planned_hours("09:30", "13:00"), Some(3.5));
        assert_eq!(planned_hours("22:00", "06:00"), Some(-16.0));
        assert_eq!(planned_hours("xx", "06:00"), None);
        assert_eq!(format_preview(Some(3.5)), "3.5h");
    }

    #[test]
    fn week_view_always_has_seven_days_from_monday() {
        let payload = WeekSchedulePayload {
            // Wednesday; the view anchors to Monday 2025-03-03.
            week_start: d(2025, 3, 5),
            week_number: None,
            year: None,
            days: vec![
                WeekDayPayload {
                    date: d(2025, 3, 9),
                    weekday: Some("Sonntag".into()),
                    weekday_index: Some(6),
                    schedules: vec![shift(1)],
                },
                WeekDayPayload {
                    date: d(2025, 3, 3),
                    weekday: Some("Montag".into()),
                    weekday_index: Some(0),
                    schedules: vec![shift(2), shift(3)],
                },
            ],
            employees: vec![],
            objects: vec![],
        };
        let week = WeekView::from_payload(payload);
        assert_eq!(week.days.len(), 7);
        assert_eq!(week.week_start, d(2025, 3, 3));
        assert_eq!(week.days[0].weekday_name, "Montag");
        assert_eq!(week.days[6].weekday_name, "Sonntag");
        assert_eq!(week.days[0].shifts.len(), 2);
        assert_eq!(week.days[6].shifts[0].id, 1);
        assert!(week.days[3].shifts.is_empty());
        assert_eq!(week.week_number, 10);
        assert_eq!(week.shift_count(), 3);
        assert_eq!(week.shift_summary(), "3 Schichten");
    }

    #[test]
    fn conflicts_map_kind_to_label() {
        let overlap = conflict("zeitüberschneidung", 1);
        assert_eq!(overlap.kind, ConflictKind::Overlap);
        assert_eq!(overlap.describe(), "MA 1 hat überlappende Schichten am Montag");

        let unassigned = conflict("keine_zuweisung", 2);
        assert_eq!(unassigned.kind, ConflictKind::Unassigned);
        assert_eq!(unassigned.describe(), "Objekt 2 hat keine Zuweisung am Montag");
    }

    #[test]
    fn conflict_display_truncates_after_three() {
        assert!(conflict_display(&[]).is_none());

        let two: Vec<_> = (0..2).map(|n| conflict("overlap", n)).collect();
        let shown = conflict_display(&two).unwrap();
        assert_eq!(shown.shown.len(), 2);
        assert!(shown.remaining_label().is_none());

        let five: Vec<_> = (0..5).map(|n| conflict("overlap", n)).collect();
        let shown = conflict_display(&five).unwrap();
        assert_eq!(shown.total, 5);
        assert_eq!(shown.shown.len(), 3);
        assert_eq!(shown.remaining_label().as_deref(), Some("… und 2 weitere"));
    }

    #[test]
    fn copy_dates_are_mondays_relative_to_today() {
        // Thursday 2025-03-06.
        let (source, target) = copy_week_dates(d(2025, 3, 6), 0, 2);
        assert_eq!(source, d(2025, 3, 3));
        assert_eq!(target, d(2025, 3, 17));
        assert_eq!(copy_targets(1)[0], (2, "Nächste Woche"));
    }

    #[test]
    fn drafts_require_employee_and_object() {
        let mut draft = ShiftDraft::new_for(2);
        let err = draft.to_quick_assign().unwrap_err();
        assert_eq!(err.error, "Bitte Mitarbeiter und Objekt auswählen");

        draft.employee_id = Some(4);
        draft.object_id = Some(5);
        draft.status = ShiftStatus::Sick;
        let request = draft.to_quick_assign().unwrap();
        assert_eq!(request.status, ShiftStatus::Normal);
        assert_eq!(request.weekday, 2);
        assert!(draft.to_update().is_err());
    }

    #[test]
    fn edit_draft_keeps_status_and_trims_seconds() {
        let mut original = shift(9);
        original.status = ShiftStatus::Substitution;
        original.replacement_for = Some(12);
        let draft = ShiftDraft::from_shift(&original, 4);
        assert!(draft.is_edit());
        assert_eq!(draft.start_time, "06:00");
        let update = draft.to_update().unwrap();
        assert_eq!(update.id, 9);
        assert_eq!(update.status, ShiftStatus::Substitution);
        assert_eq!(update.weekday, 4);
        assert_eq!(update.planned_hours, 8.0);
        assert_eq!(substitution_note(&original).as_deref(), Some("Vertretung für MA-12"));
    }
}
