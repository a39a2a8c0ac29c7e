use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use thiserror::Error;

use crate::api::{compat, ApiError, CurrentBreakResponse, CurrentEntryResponse};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockError {
    #[error("Du bist bereits eingestempelt.")]
    AlreadyWorking,
    #[error("Du bist nicht eingestempelt.")]
    NotWorking,
    #[error("Die Pause läuft bereits.")]
    AlreadyPaused,
    #[error("Es läuft keine Pause.")]
    NotPaused,
    #[error("Bitte zuerst ein Objekt auswählen.")]
    NoObjectSelected,
}

impl From<ClockError> for ApiError {
    fn from(error: ClockError) -> Self {
        ApiError::validation(error.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivePause {
    pub break_id: Option<i64>,
    pub started_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActiveEntry {
    pub entry_id: Option<i64>,
    pub object_id: i64,
    pub object_name: Option<String>,
    pub check_in: DateTime<Utc>,
    pub pause: Option<ActivePause>,
    pub accumulated_pause_seconds: i64,
}

/// Local view of the employee's open time entry.
///
/// `Idle` means checked out. All transitions validate the current state so the
/// UI can reject a click before talking to the backend.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TimeClock {
    #[default]
    Idle,
    Working(ActiveEntry),
}

impl TimeClock {
    pub fn is_working(&self) -> bool {
        matches!(self, Self::Working(_))
    }

    pub fn is_paused(&self) -> bool {
        self.active().is_some_and(|entry| entry.pause.is_some())
    }

    pub fn active(&self) -> Option<&ActiveEntry> {
        match self {
            Self::Idle => None,
            Self::Working(entry) => Some(entry),
        }
    }

    pub fn ensure_can_check_in(&self) -> Result<(), ClockError> {
        match self {
            Self::Idle => Ok(()),
            Self::Working(_) => Err(ClockError::AlreadyWorking),
        }
    }

    pub fn ensure_can_check_out(&self) -> Result<(), ClockError> {
        self.active().map(|_| ()).ok_or(ClockError::NotWorking)
    }

    pub fn ensure_can_start_pause(&self) -> Result<&ActiveEntry, ClockError> {
        let entry = self.active().ok_or(ClockError::NotWorking)?;
        if entry.pause.is_some() {
            return Err(ClockError::AlreadyPaused);
        }
        Ok(entry)
    }

    pub fn ensure_can_end_pause(&self) -> Result<&ActivePause, ClockError> {
        let entry = self.active().ok_or(ClockError::NotWorking)?;
        entry.pause.as_ref().ok_or(ClockError::NotPaused)
    }

    pub fn check_in(
        &mut self,
        entry_id: Option<i64>,
        object_id: i64,
        check_in: DateTime<Utc>,
    ) -> Result<(), ClockError> {
        self.ensure_can_check_in()?;
        *self = Self::Working(ActiveEntry {
            entry_id,
            object_id,
            object_name: None,
            check_in,
            pause: None,
            accumulated_pause_seconds: 0,
        });
        Ok(())
    }

    pub fn check_out(&mut self) -> Result<(), ClockError> {
        self.ensure_can_check_out()?;
        *self = Self::Idle;
        Ok(())
    }

    pub fn pause_start(
        &mut self,
        break_id: Option<i64>,
        started_at: DateTime<Utc>,
    ) -> Result<(), ClockError> {
        self.ensure_can_start_pause()?;
        if let Self::Working(entry) = self {
            entry.pause = Some(ActivePause {
                break_id,
                started_at,
            });
        }
        Ok(())
    }

    /// Ends the pause and folds its length into the accumulated pause time.
    pub fn pause_end(&mut self, ended_at: DateTime<Utc>) -> Result<(), ClockError> {
        self.ensure_can_end_pause()?;
        if let Self::Working(entry) = self {
            if let Some(pause) = entry.pause.take() {
                let seconds = (ended_at - pause.started_at).num_seconds().max(0);
                entry.accumulated_pause_seconds += seconds;
            }
        }
        Ok(())
    }

    /// Net working seconds at `now`, never negative.
    pub fn elapsed_work_seconds(&self, now: DateTime<Utc>) -> i64 {
        let Some(entry) = self.active() else {
            return 0;
        };
        let gross = (now - entry.check_in).num_seconds();
        let running_pause = entry
            .pause
            .as_ref()
            .map(|pause| (now - pause.started_at).num_seconds().max(0))
            .unwrap_or(0);
        (gross - entry.accumulated_pause_seconds - running_pause).max(0)
    }

    /// Rebuilds the clock from `time-entries/current` and `breaks/current`.
    pub fn from_server(
        current: &CurrentEntryResponse,
        active_break: Option<&CurrentBreakResponse>,
        tz: Tz,
    ) -> Self {
        let (true, Some(check_in), Some(object_id)) =
            (current.is_working, current.check_in, current.object_id)
        else {
            return Self::Idle;
        };
        let active_break = active_break.and_then(|b| b.active_break.as_ref());
        let pause = match (active_break, current.is_paused, current.pause_start_time) {
            (Some(active), _, _) => Some(ActivePause {
                break_id: Some(active.id),
                started_at: compat::correct_server_timestamp(active.start_time, tz),
            }),
            (None, true, Some(started)) => Some(ActivePause {
                break_id: None,
                started_at: compat::correct_server_timestamp(started, tz),
            }),
            _ => None,
        };
        Self::Working(ActiveEntry {
            entry_id: current.entry_id,
            object_id,
            object_name: current.object_name.clone(),
            check_in: compat::correct_server_timestamp(check_in, tz),
            pause,
            accumulated_pause_seconds: current
                .total_pause_duration
                .map(|secs| secs.round() as i64)
                .unwrap_or(0)
                .max(0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ActiveBreak;
    use chrono::{Duration, NaiveDateTime, TimeZone};

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, 1, h, m, s).unwrap()
    }

    fn naive(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
    }

    fn working_since(h: u32) -> TimeClock {
        let mut clock = TimeClock::default();
        clock.check_in(Some(1), 7, at(h, 0, 0)).unwrap();
        clock
    }

    #[test]
    fn check_in_requires_idle() {
        let mut clock = working_since(8);
        assert_eq!(
            clock.check_in(Some(2), 8, at(9, 0, 0)),
            Err(ClockError::AlreadyWorking)
        );
        assert_eq!(clock.active().map(|e| e.object_id), Some(7));
    }

    #[test]
    fn check_out_requires_working_and_clears_state() {
        let mut clock = TimeClock::default();
        assert_eq!(clock.check_out(), Err(ClockError::NotWorking));

        let mut clock = working_since(8);
        clock.pause_start(Some(3), at(9, 0, 0)).unwrap();
        clock.check_out().unwrap();
        assert_eq!(clock, TimeClock::Idle);
        assert_eq!(clock.elapsed_work_seconds(at(12, 0, 0)), 0);
    }

    #[test]
    fn pause_toggles_and_accumulates() {
        let mut clock = working_since(8);
        assert_eq!(clock.pause_end(at(9, 0, 0)), Err(ClockError::NotPaused));
        clock.pause_start(Some(3), at(9, 0, 0)).unwrap();
        assert!(clock.is_paused());
        assert_eq!(
            clock.pause_start(Some(4), at(9, 5, 0)),
            Err(ClockError::AlreadyPaused)
        );
        clock.pause_end(at(9, 15, 0)).unwrap();
        assert!(!clock.is_paused());
        assert_eq!(clock.active().unwrap().accumulated_pause_seconds, 900);
    }

    #[test]
    fn pause_requires_working() {
        let mut clock = TimeClock::default();
        assert_eq!(
            clock.pause_start(None, at(9, 0, 0)),
            Err(ClockError::NotWorking)
        );
    }

    #[test]
    fn elapsed_subtracts_finished_and_running_pauses() {
        let mut clock = working_since(8);
        clock.pause_start(None, at(9, 0, 0)).unwrap();
        clock.pause_end(at(9, 30, 0)).unwrap();
        assert_eq!(clock.elapsed_work_seconds(at(10, 0, 0)), 90 * 60);

        clock.pause_start(None, at(10, 0, 0)).unwrap();
        assert_eq!(clock.elapsed_work_seconds(at(10, 10, 0)), 90 * 60);
    }

    #[test]
    fn elapsed_is_floored_at_zero() {
        let clock = working_since(10);
        assert_eq!(clock.elapsed_work_seconds(at(9, 0, 0)), 0);
        assert_eq!(
            clock.elapsed_work_seconds(at(10, 0, 0) + Duration::seconds(5)),
            5
        );
    }

    #[test]
    fn server_state_is_corrected_on_hydration() {
        let current = CurrentEntryResponse {
            is_working: true,
            check_in: Some(naive("2025-07-01T06:00:00")),
            object_id: Some(7),
            object_name: Some("Praxis Dr. Weber".into()),
            entry_id: Some(11),
            is_paused: false,
            pause_start_time: None,
            total_pause_duration: Some(120.0),
        };
        let breaks = CurrentBreakResponse {
            active_break: Some(ActiveBreak {
                id: 5,
                start_time: naive("2025-07-01T07:00:00"),
                duration_minutes: None,
            }),
        };
        let clock = TimeClock::from_server(&current, Some(&breaks), chrono_tz::Europe::Berlin);
        let entry = clock.active().expect("working");
        assert_eq!(entry.check_in, at(6, 0, 0));
        assert_eq!(entry.accumulated_pause_seconds, 120);
        assert_eq!(
            entry.pause,
            Some(ActivePause {
                break_id: Some(5),
                started_at: at(7, 0, 0)
            })
        );
    }

    #[test]
    fn not_working_response_hydrates_idle() {
        let clock = TimeClock::from_server(
            &CurrentEntryResponse::default(),
            None,
            chrono_tz::Europe::Berlin,
        );
        assert_eq!(clock, TimeClock::Idle);
    }
}
