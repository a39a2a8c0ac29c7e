use crate::{
    api::ApiError,
    components::layout::{ErrorMessage, LoadingSpinner},
    pages::dashboard::repository::HoursTotals,
    utils::time::format_hours,
};
use leptos::*;

#[component]
pub fn HoursSummary(totals: Resource<(u32, u32, usize), Result<HoursTotals, ApiError>>) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <h3 class="text-base font-semibold text-fg">"Meine Stunden"</h3>
            {move || match totals.get() {
                None => view! { <LoadingSpinner /> }.into_view(),
                Some(Err(err)) => {
                    log::error!("hour totals failed: {}", err);
                    view! { <ErrorMessage message="Stunden konnten nicht geladen werden." /> }.into_view()
                }
                Some(Ok(data)) => view! {
                    <div class="grid grid-cols-1 gap-4 sm:grid-cols-3">
                        <Metric label="Heute" value=format_hours(data.today) />
                        <Metric label="Diese Woche" value=format_hours(data.week) />
                        <Metric label="Dieser Monat" value=format_hours(data.month) />
                    </div>
                }.into_view(),
            }}
        </div>
    }
}

#[component]
fn Metric(#[prop(into)] label: String, value: String) -> impl IntoView {
    view! {
        <div class="p-4 rounded-lg bg-surface-muted border border-border">
            <p class="text-xs font-bold text-fg-muted uppercase tracking-widest">{label}</p>
            <p class="mt-2 text-2xl font-extrabold text-fg">{value}</p>
        </div>
    }
}
