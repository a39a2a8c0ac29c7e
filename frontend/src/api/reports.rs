use serde_json::Value;

use super::{
    client::ApiClient,
    compat,
    types::{ApiError, HistoryResponse, HoursReport},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportPeriod {
    Today,
    Week,
    Month,
}

impl ReportPeriod {
    fn path(self) -> &'static str {
        match self {
            Self::Today => "reports/my/today",
            Self::Week => "reports/my/week",
            Self::Month => "reports/my/month",
        }
    }
}

impl ApiClient {
    pub async fn get_my_hours(&self, period: ReportPeriod) -> Result<HoursReport, ApiError> {
        self.get_json(period.path()).await
    }

    /// `GET reports/my/history` with the range parameters of the selector.
    pub async fn get_my_history(
        &self,
        params: &[(&'static str, String)],
    ) -> Result<HistoryResponse, ApiError> {
        let raw: Value = self
            .get_json_with_query("reports/my/history", params)
            .await?;
        compat::parse_history_payload(raw)
            .map_err(|e| ApiError::unknown(format!("Verlauf konnte nicht gelesen werden: {}", e)))
    }
}
