use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::rc::Rc;

use super::utils::{copy_week_dates, Conflict, ShiftDraft, WeekView};
use crate::api::{ApiClient, ApiError, CopyWeekRequest};

/// Week grid and conflict list load independently; one failing does not hide the other.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeekLoad {
    pub week: Result<WeekView, ApiError>,
    pub conflicts: Result<Vec<Conflict>, ApiError>,
}

impl From<ApiError> for WeekLoad {
    fn from(error: ApiError) -> Self {
        Self {
            week: Err(error.clone()),
            conflicts: Err(error),
        }
    }
}

#[derive(Clone)]
pub struct ScheduleRepository {
    client: Rc<ApiClient>,
}

impl ScheduleRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn load_week(&self, week_offset: i32) -> WeekLoad {
        let (week, conflicts) = futures::join!(
            self.client.get_week_schedule(week_offset),
            self.client.get_schedule_conflicts(week_offset),
        );
        if let Err(err) = &conflicts {
            log::warn!("schedule conflicts unavailable: {}", err);
        }
        WeekLoad {
            week: week.map(WeekView::from_payload),
            conflicts: conflicts.map(|response| {
                response
                    .conflicts
                    .iter()
                    .map(Conflict::from_payload)
                    .collect()
            }),
        }
    }

    pub async fn add_shift(&self, draft: &ShiftDraft) -> Result<(), ApiError> {
        let request = draft.to_quick_assign()?;
        self.client.quick_assign_shift(&request).await
    }

    pub async fn edit_shift(&self, draft: &ShiftDraft) -> Result<(), ApiError> {
        let update = draft.to_update()?;
        self.client.bulk_update_shifts(&[update]).await
    }

    pub async fn delete_shift(&self, shift_id: i64) -> Result<(), ApiError> {
        self.client.delete_shift(shift_id).await
    }

    pub async fn copy_week(
        &self,
        today: NaiveDate,
        source_offset: i32,
        target_offset: i32,
    ) -> Result<(), ApiError> {
        if source_offset == target_offset {
            return Err(ApiError::validation("Quell- und Zielwoche sind identisch"));
        }
        let (source_week, target_week) = copy_week_dates(today, source_offset, target_offset);
        self.client
            .copy_week(&CopyWeekRequest {
                source_week,
                target_week,
            })
            .await
    }
}
