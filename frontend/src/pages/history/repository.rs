use chrono::NaiveDate;
use std::rc::Rc;

use super::utils::HistoryRange;
use crate::api::{ApiClient, ApiError, HistoryResponse};

#[derive(Clone)]
pub struct HistoryRepository {
    client: Rc<ApiClient>,
}

impl HistoryRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn load(
        &self,
        range: HistoryRange,
        today: NaiveDate,
    ) -> Result<HistoryResponse, ApiError> {
        let mut history = self.client.get_my_history(&range.query_params(today)).await?;
        range.retain_window(&mut history.entries, today);
        Ok(history)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use serde_json::json;

    fn repo(server: &MockServer) -> HistoryRepository {
        HistoryRepository::new_with_client(Rc::new(signed_in_client(server)))
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 12).unwrap()
    }

    #[tokio::test]
    async fn rolling_range_sends_days_parameter() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/v1/reports/my/history");
            then.status(200).json_body(json!({ "entries": [] }));
        });

        repo(&server)
            .load(HistoryRange::LastDays(7), today())
            .await
            .unwrap();
        let query = server
            .last_request(GET, "/api/v1/reports/my/history")
            .unwrap()
            .query;
        assert_eq!(query.as_deref(), Some("days=7"));
    }

    #[tokio::test]
    async fn all_range_asks_for_a_full_year_and_accepts_bare_list() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/v1/reports/my/history");
            then.status(200).json_body(json!([
                { "date": "2025-03-03", "object_name": "Lidl Mitte", "total_hours": 3.5 }
            ]));
        });

        let history = repo(&server).load(HistoryRange::All, today()).await.unwrap();
        assert_eq!(history.entries.len(), 1);
        let query = server
            .last_request(GET, "/api/v1/reports/my/history")
            .unwrap()
            .query;
        assert_eq!(query.as_deref(), Some("days=365"));
    }

    #[tokio::test]
    async fn this_month_reaches_back_to_the_first_and_drops_older_entries() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/v1/reports/my/history");
            then.status(200).json_body(json!({ "entries": [
                { "date": "2025-02-27", "object_name": "Aldi Süd", "hours": 2.0 },
                { "date": "2025-03-03", "object_name": "Lidl Mitte", "hours": 3.5 },
                { "date": "2025-03-10", "object_name": "Lidl Mitte", "hours": 1.5 }
            ]}));
        });

        let history = repo(&server)
            .load(HistoryRange::ThisMonth, today())
            .await
            .unwrap();
        let query = server
            .last_request(GET, "/api/v1/reports/my/history")
            .unwrap()
            .query
            .unwrap();
        assert_eq!(query, "days=12");
        assert_eq!(history.entries.len(), 2);
        assert!(history
            .entries
            .iter()
            .all(|entry| entry.date >= NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()));
    }
}
