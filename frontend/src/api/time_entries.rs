use super::{
    client::ApiClient,
    types::{
        ApiError, CheckInRequest, CurrentEntryResponse, HasWorkTodayResponse, ObjectToday,
        TimeEntryResponse, WasPresentRequest, WasPresentResponse,
    },
};

impl ApiClient {
    pub async fn check_in(&self, request: &CheckInRequest) -> Result<TimeEntryResponse, ApiError> {
        self.post_json("time-entries/check-in", request).await
    }

    pub async fn check_out(&self) -> Result<TimeEntryResponse, ApiError> {
        self.post_json("time-entries/check-out", &serde_json::json!({}))
            .await
    }

    /// Closes the open entry and opens a new one at another object.
    pub async fn switch_object(
        &self,
        request: &CheckInRequest,
    ) -> Result<TimeEntryResponse, ApiError> {
        self.post_json("time-entries/switch-object", request).await
    }

    pub async fn get_current_entry(&self) -> Result<CurrentEntryResponse, ApiError> {
        self.get_json("time-entries/current").await
    }

    pub async fn was_present(
        &self,
        request: &WasPresentRequest,
    ) -> Result<WasPresentResponse, ApiError> {
        self.post_json("time-entries/war-anwesend", request).await
    }

    pub async fn get_my_objects_today(&self) -> Result<Vec<ObjectToday>, ApiError> {
        self.get_json("time-entries/my-objects-today").await
    }

    pub async fn has_work_today(&self) -> Result<HasWorkTodayResponse, ApiError> {
        self.get_json("time-entries/has-work-today").await
    }
}
