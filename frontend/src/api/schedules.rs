use super::{
    client::ApiClient,
    types::{
        ApiError, ConflictsResponse, CopyWeekRequest, QuickAssignRequest, ShiftUpdate,
        WeekSchedulePayload,
    },
};

impl ApiClient {
    pub async fn get_week_schedule(&self, week_offset: i32) -> Result<WeekSchedulePayload, ApiError> {
        self.get_json_with_query("admin/schedules/week", &[("week_offset", week_offset)])
            .await
    }

    pub async fn get_schedule_conflicts(
        &self,
        week_offset: i32,
    ) -> Result<ConflictsResponse, ApiError> {
        self.get_json_with_query("admin/schedules/conflicts", &[("week_offset", week_offset)])
            .await
    }

    pub async fn quick_assign_shift(&self, request: &QuickAssignRequest) -> Result<(), ApiError> {
        self.post_empty("admin/schedules/quick-assign", request).await
    }

    /// The endpoint only accepts a list, even for a single shift.
    pub async fn bulk_update_shifts(&self, updates: &[ShiftUpdate]) -> Result<(), ApiError> {
        self.post_empty("admin/schedules/bulk-update", updates).await
    }

    pub async fn copy_week(&self, request: &CopyWeekRequest) -> Result<(), ApiError> {
        self.post_empty("admin/schedules/copy-week", request).await
    }

    pub async fn delete_shift(&self, shift_id: i64) -> Result<(), ApiError> {
        self.delete(&format!("admin/schedules/{}", shift_id)).await
    }
}
