use leptos::*;

use crate::{
    api::{compat, HistoryEntry},
    components::empty_state::EmptyState,
    pages::history::utils::{
        clock_time, format_currency, format_hours_decimal, service_badge_class, service_label,
    },
    utils::time::format_date_de,
};

const EMPTY_TITLE: &str = "Keine Einträge im gewählten Zeitraum";

fn check_out_cell(entry: &HistoryEntry) -> View {
    match clock_time(entry.check_out.as_deref()) {
        Some(time) => time.into_view(),
        None => view! { <span class="text-status-success-text font-medium">"Läuft..."</span> }.into_view(),
    }
}

fn service_badge(entry: &HistoryEntry) -> impl IntoView {
    let label = service_label(entry);
    let class = format!(
        "inline-flex px-2 py-1 text-xs rounded-full {}",
        service_badge_class(&label)
    );
    view! { <span class=class>{label}</span> }
}

#[component]
pub fn HistoryTable(entries: Vec<HistoryEntry>) -> impl IntoView {
    if entries.is_empty() {
        return view! { <EmptyState title=EMPTY_TITLE /> }.into_view();
    }

    let rows = entries
        .iter()
        .map(|entry| {
            let rate = entry.hourly_rate.map(format_currency).unwrap_or_else(|| "-".into());
            view! {
                <tr class="hover:bg-surface-muted">
                    <td class="px-6 py-4 whitespace-nowrap text-sm">{format_date_de(entry.date)}</td>
                    <td class="px-6 py-4 whitespace-nowrap text-sm font-medium">{entry.object_name.clone().unwrap_or_default()}</td>
                    <td class="px-6 py-4 whitespace-nowrap text-sm">{clock_time(entry.check_in.as_deref()).unwrap_or_else(|| "-".into())}</td>
                    <td class="px-6 py-4 whitespace-nowrap text-sm">{check_out_cell(entry)}</td>
                    <td class="px-6 py-4 whitespace-nowrap text-sm font-medium">{format_hours_decimal(compat::effective_hours(entry))}</td>
                    <td class="px-6 py-4 whitespace-nowrap text-sm">{service_badge(entry)}</td>
                    <td class="px-6 py-4 whitespace-nowrap text-sm">{rate}</td>
                    <td class="px-6 py-4 whitespace-nowrap text-sm font-semibold">{format_currency(compat::effective_amount(entry))}</td>
                </tr>
            }
        })
        .collect_view();

    let cards = entries
        .iter()
        .map(|entry| view! {
            <div class="bg-surface-elevated rounded-lg shadow-sm border border-border p-4 space-y-2">
                <div class="flex justify-between items-start">
                    <div>
                        <div class="font-semibold text-sm">{format_date_de(entry.date)}</div>
                        <div class="text-fg-muted text-xs">{entry.object_name.clone().unwrap_or_default()}</div>
                    </div>
                    {service_badge(entry)}
                </div>
                <div class="grid grid-cols-2 gap-2 text-xs">
                    <div>"Check-in: " {clock_time(entry.check_in.as_deref()).unwrap_or_else(|| "-".into())}</div>
                    <div>"Check-out: " {check_out_cell(entry)}</div>
                </div>
                <div class="flex justify-between items-center pt-2 border-t border-border text-sm">
                    <span>"Stunden: " <b>{format_hours_decimal(compat::effective_hours(entry))}</b></span>
                    <span class="font-bold text-status-success-text">{format_currency(compat::effective_amount(entry))}</span>
                </div>
            </div>
        })
        .collect_view();

    view! {
        <div class="block md:hidden space-y-3">{cards}</div>
        <div class="hidden md:block bg-surface-elevated rounded-lg shadow overflow-x-auto">
            <table class="min-w-full">
                <thead class="bg-surface-muted">
                    <tr>
                        {["Datum", "Objekt", "Check-in", "Check-out", "Stunden", "Service", "Stundensatz", "Betrag"]
                            .into_iter()
                            .map(|title| view! {
                                <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">{title}</th>
                            })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">{rows}</tbody>
            </table>
        </div>
    }
    .into_view()
}
