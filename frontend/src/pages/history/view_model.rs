use chrono::NaiveDate;
use leptos::*;
use std::rc::Rc;

use crate::{
    api::{ApiClient, ApiError, HistoryResponse},
    pages::history::{repository::HistoryRepository, utils::HistoryRange},
    utils::{time::today_in_app_tz, timer::RequestScope},
};

#[derive(Clone, Copy)]
pub struct HistoryViewModel {
    pub range: RwSignal<HistoryRange>,
    pub date_from: RwSignal<String>,
    pub date_to: RwSignal<String>,
    pub range_error: RwSignal<Option<ApiError>>,
    pub history_resource: Resource<HistoryRange, Result<HistoryResponse, ApiError>>,
}

impl HistoryViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repo = HistoryRepository::new_with_client(Rc::new(api));
        let range = create_rw_signal(HistoryRange::default());
        let scope = RequestScope::new();

        let history_resource = create_resource(
            move || range.get(),
            move |range| {
                let repo = repo.clone();
                async move { scope.run(repo.load(range, today_in_app_tz())).await? }
            },
        );

        Self {
            range,
            date_from: create_rw_signal(String::new()),
            date_to: create_rw_signal(String::new()),
            range_error: create_rw_signal(None),
            history_resource,
        }
    }

    pub fn select(&self, range: HistoryRange) {
        self.range_error.set(None);
        self.range.set(range);
    }

    /// Applies the explicit from/to inputs; the active range stays unchanged on error.
    pub fn apply_between(&self) {
        let parse = |raw: String| NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok();
        let (Some(from), Some(to)) = (
            parse(self.date_from.get_untracked()),
            parse(self.date_to.get_untracked()),
        ) else {
            self.range_error
                .set(Some(ApiError::validation("Bitte Start- und Enddatum wählen")));
            return;
        };
        match HistoryRange::between(from, to) {
            Ok(range) => self.select(range),
            Err(err) => self.range_error.set(Some(err)),
        }
    }
}

pub fn use_history_view_model() -> HistoryViewModel {
    match use_context::<HistoryViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = HistoryViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
