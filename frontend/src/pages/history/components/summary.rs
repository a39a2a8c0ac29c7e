use leptos::*;

use crate::pages::history::utils::{format_currency, format_hours_decimal, HistoryTotals};

#[component]
pub fn HistorySummary(#[prop(into)] period: String, totals: HistoryTotals) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
            <div class="bg-status-info-bg p-4 rounded-lg">
                <div class="text-sm text-status-info-text font-medium">"Zeitraum"</div>
                <div class="text-lg font-semibold mt-1 text-fg">{period}</div>
            </div>
            <div class="bg-status-success-bg p-4 rounded-lg">
                <div class="text-sm text-status-success-text font-medium">"Gesamtstunden"</div>
                <div class="text-2xl font-bold mt-1 text-fg">{format_hours_decimal(totals.hours)}</div>
            </div>
            <div class="bg-surface-muted p-4 rounded-lg">
                <div class="text-sm text-fg-muted font-medium">"Gesamtbetrag"</div>
                <div class="text-2xl font-bold mt-1 text-fg">{format_currency(totals.amount)}</div>
            </div>
        </div>
    }
}
