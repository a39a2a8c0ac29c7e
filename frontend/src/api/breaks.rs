use super::{
    client::ApiClient,
    types::{ApiError, BreakEndRequest, BreakResponse, BreakStartRequest, CurrentBreakResponse},
};

impl ApiClient {
    pub async fn start_break(&self, time_entry_id: Option<i64>) -> Result<BreakResponse, ApiError> {
        let request = BreakStartRequest {
            time_entry_id,
            is_paid: false,
        };
        self.post_json("breaks/start", &request).await
    }

    pub async fn end_break(&self, break_id: i64) -> Result<BreakResponse, ApiError> {
        self.post_json("breaks/end", &BreakEndRequest { break_id })
            .await
    }

    pub async fn get_current_break(&self) -> Result<CurrentBreakResponse, ApiError> {
        self.get_json("breaks/current").await
    }
}
