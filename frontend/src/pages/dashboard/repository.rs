use chrono::Utc;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::rc::Rc;

use crate::{
    api::{
        compat, ApiClient, ApiError, CheckInRequest, CurrentBreakResponse, CurrentEntryResponse,
        ObjectToday, ReportPeriod, ServiceType, WasPresentRequest, WasPresentResponse,
    },
    state::time_clock::{ClockError, TimeClock},
};

/// Raw server view of the open entry, kept serialisable for resources.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClockSnapshot {
    pub current: CurrentEntryResponse,
    pub active_break: Option<CurrentBreakResponse>,
}

impl ClockSnapshot {
    pub fn to_clock(&self, tz: Tz) -> TimeClock {
        TimeClock::from_server(&self.current, self.active_break.as_ref(), tz)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HoursTotals {
    pub today: f64,
    pub week: f64,
    pub month: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TodayObjects {
    pub objects: Vec<ObjectToday>,
    pub notice: Option<String>,
}

#[derive(Clone)]
pub struct DashboardRepository {
    client: Rc<ApiClient>,
}

impl DashboardRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    /// The break lookup is best effort; an open entry alone is enough to run the timer.
    pub async fn load_status(&self) -> Result<ClockSnapshot, ApiError> {
        let current = self.client.get_current_entry().await?;
        let active_break = if current.is_working {
            match self.client.get_current_break().await {
                Ok(active) => Some(active),
                Err(err) => {
                    log::warn!("current break unavailable: {}", err);
                    None
                }
            }
        } else {
            None
        };
        Ok(ClockSnapshot {
            current,
            active_break,
        })
    }

    pub async fn load_totals(&self) -> Result<HoursTotals, ApiError> {
        let (today, week, month) = futures::join!(
            self.client.get_my_hours(ReportPeriod::Today),
            self.client.get_my_hours(ReportPeriod::Week),
            self.client.get_my_hours(ReportPeriod::Month),
        );
        Ok(HoursTotals {
            today: today?.total_hours,
            week: week?.total_hours,
            month: month?.total_hours,
        })
    }

    pub async fn load_objects(&self) -> Result<TodayObjects, ApiError> {
        let objects = self.client.get_my_objects_today().await?;
        if !objects.is_empty() {
            return Ok(TodayObjects {
                objects,
                notice: None,
            });
        }
        let work = self.client.has_work_today().await?;
        let notice = if work.has_work {
            "Keine Objekte für heute geplant"
        } else {
            "Heute ist kein Arbeitstag laut Dienstplan"
        };
        Ok(TodayObjects {
            objects,
            notice: Some(notice.to_string()),
        })
    }

    pub async fn check_in(
        &self,
        clock: &TimeClock,
        object_id: i64,
        notes: String,
        tz: Tz,
    ) -> Result<TimeClock, ApiError> {
        clock.ensure_can_check_in()?;
        let entry = self
            .client
            .check_in(&CheckInRequest { object_id, notes })
            .await?;
        let mut next = TimeClock::Idle;
        next.check_in(
            Some(entry.id),
            entry.object_id,
            compat::correct_server_timestamp(entry.check_in, tz),
        )?;
        Ok(next)
    }

    /// A running pause is closed first so the entry is checked out with its break ended.
    pub async fn check_out(&self, clock: &TimeClock, tz: Tz) -> Result<TimeClock, ApiError> {
        clock.ensure_can_check_out()?;
        let mut next = if clock.is_paused() {
            self.pause_end(clock, tz).await?
        } else {
            clock.clone()
        };
        self.client.check_out().await?;
        next.check_out()?;
        Ok(next)
    }

    pub async fn switch_object(
        &self,
        clock: &TimeClock,
        object_id: i64,
        notes: String,
        tz: Tz,
    ) -> Result<TimeClock, ApiError> {
        let current = clock.active().ok_or(ClockError::NotWorking)?;
        if current.object_id == object_id {
            return Ok(clock.clone());
        }
        let entry = self
            .client
            .switch_object(&CheckInRequest { object_id, notes })
            .await?;
        let mut next = TimeClock::Idle;
        next.check_in(
            Some(entry.id),
            entry.object_id,
            compat::correct_server_timestamp(entry.check_in, tz),
        )?;
        Ok(next)
    }

    pub async fn pause_start(&self, clock: &TimeClock, tz: Tz) -> Result<TimeClock, ApiError> {
        let entry = clock.ensure_can_start_pause()?;
        let started = self.client.start_break(entry.entry_id).await?;
        let mut next = clock.clone();
        next.pause_start(
            Some(started.id),
            compat::correct_server_timestamp(started.start_time, tz),
        )?;
        Ok(next)
    }

    /// Without a known break id the backend closes whichever break is open.
    pub async fn pause_end(&self, clock: &TimeClock, tz: Tz) -> Result<TimeClock, ApiError> {
        let pause = clock.ensure_can_end_pause()?;
        let break_id = match pause.break_id {
            Some(id) => id,
            None => self
                .client
                .get_current_break()
                .await?
                .active_break
                .map(|active| active.id)
                .ok_or(ClockError::NotPaused)?,
        };
        let ended = self.client.end_break(break_id).await?;
        let ended_at = ended
            .end_time
            .map(|end| compat::correct_server_timestamp(end, tz))
            .unwrap_or_else(Utc::now);
        let mut next = clock.clone();
        next.pause_end(ended_at)?;
        Ok(next)
    }

    pub async fn was_present(
        &self,
        object_id: i64,
        service_type: ServiceType,
    ) -> Result<WasPresentResponse, ApiError> {
        self.client
            .was_present(&WasPresentRequest {
                object_id,
                service_type,
            })
            .await
    }
}
