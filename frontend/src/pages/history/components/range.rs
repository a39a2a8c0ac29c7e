use leptos::*;

use crate::{
    components::error::InlineErrorMessage,
    pages::history::{
        utils::{HistoryRange, ROLLING_DAYS},
        view_model::HistoryViewModel,
    },
};

const ACTIVE: &str = "px-3 py-1.5 rounded-lg text-sm font-medium bg-action-primary-bg text-action-primary-text shadow";
const IDLE: &str = "px-3 py-1.5 rounded-lg text-sm font-medium bg-surface-muted text-fg hover:bg-surface";

#[component]
pub fn RangeSelector(vm: HistoryViewModel) -> impl IntoView {
    let choice = move |range: HistoryRange, label: String| {
        view! {
            <button
                class=move || if vm.range.get() == range { ACTIVE } else { IDLE }
                on:click=move |_| vm.select(range)
            >
                {label}
            </button>
        }
    };
    let is_between = move || matches!(vm.range.get(), HistoryRange::Between { .. });

    view! {
        <div class="bg-surface-elevated p-4 rounded-lg shadow space-y-3">
            <h3 class="text-lg font-semibold text-fg">"Arbeitshistorie"</h3>
            <div class="flex flex-wrap gap-2">
                {ROLLING_DAYS
                    .into_iter()
                    .map(|days| choice(HistoryRange::LastDays(days), format!("Letzte {days} Tage")))
                    .collect_view()}
                {choice(HistoryRange::ThisMonth, "Dieser Monat".into())}
                {choice(HistoryRange::LastMonth, "Letzter Monat".into())}
                {choice(HistoryRange::All, "Alle".into())}
            </div>
            <div class="flex flex-wrap items-end gap-2">
                <label class="text-sm text-fg">
                    "Von"
                    <input
                        type="date"
                        class="block border border-border rounded-md px-2 py-1 bg-surface text-fg"
                        prop:value=move || vm.date_from.get()
                        on:input=move |ev| vm.date_from.set(event_target_value(&ev))
                    />
                </label>
                <label class="text-sm text-fg">
                    "Bis"
                    <input
                        type="date"
                        class="block border border-border rounded-md px-2 py-1 bg-surface text-fg"
                        prop:value=move || vm.date_to.get()
                        on:input=move |ev| vm.date_to.set(event_target_value(&ev))
                    />
                </label>
                <button
                    class=move || if is_between() { ACTIVE } else { IDLE }
                    on:click=move |_| vm.apply_between()
                >
                    "Zeitraum anwenden"
                </button>
            </div>
            <InlineErrorMessage error=vm.range_error.into() />
        </div>
    }
}
