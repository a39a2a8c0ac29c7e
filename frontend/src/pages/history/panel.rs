use leptos::*;

use crate::{
    components::layout::{ErrorMessage, Layout, LoadingSpinner},
    pages::history::{
        components::{HistorySummary, HistoryTable, RangeSelector},
        utils::summarize,
        view_model::use_history_view_model,
    },
    utils::time::today_in_app_tz,
};

#[component]
pub fn HistoryPage() -> impl IntoView {
    let vm = use_history_view_model();

    let content = move || match vm.history_resource.get() {
        None => view! { <LoadingSpinner /> }.into_view(),
        Some(Err(err)) => {
            log::error!("history failed: {}", err);
            view! { <ErrorMessage message="Fehler beim Laden der Historie" /> }.into_view()
        }
        Some(Ok(history)) => {
            let period = vm.range.get_untracked().label(today_in_app_tz());
            let totals = summarize(&history.entries);
            view! {
                <HistorySummary period=period totals=totals />
                <HistoryTable entries=history.entries />
            }
            .into_view()
        }
    };

    view! {
        <Layout title="Verlauf">
            <div class="space-y-6">
                <RangeSelector vm=vm />
                {content}
            </div>
        </Layout>
    }
}
