use leptos::*;

use crate::{
    api::{DashboardStats, LiveStatusEntry},
    components::{
        empty_state::EmptyState,
        layout::{ErrorMessage, LoadingSpinner},
    },
    pages::admin::{utils::live_status_label, view_model::AdminViewModel},
    utils::time::short_time,
};

#[component]
fn StatCard(#[prop(into)] label: String, #[prop(into)] value: String, accent: &'static str) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated rounded-lg shadow p-6">
            <p class="text-sm text-fg-muted">{label}</p>
            <p class=format!("text-2xl font-bold {accent}")>{value}</p>
        </div>
    }
}

fn stats_cards(stats: DashboardStats) -> View {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
            <StatCard label="Aktive Mitarbeiter" value=stats.active_employees.to_string() accent="text-status-success-text" />
            <StatCard label="In Pause" value=stats.paused_employees.to_string() accent="text-status-warning-text" />
            <StatCard label="Offline" value=stats.offline_employees.to_string() accent="text-fg-muted" />
            <StatCard label="Stunden heute" value=format!("{:.1}h", stats.total_hours_today) accent="text-status-info-text" />
        </div>
    }
    .into_view()
}

fn live_list(entries: Vec<LiveStatusEntry>) -> View {
    if entries.is_empty() {
        return view! { <EmptyState title="Niemand ist gerade eingestempelt" /> }.into_view();
    }
    view! {
        <ul class="divide-y divide-border">
            {entries.into_iter().map(|entry| {
                let (class, label) = live_status_label(entry.status.as_deref());
                view! {
                    <li class="py-3 flex items-center justify-between">
                        <div>
                            <p class="font-semibold text-fg">{entry.name}</p>
                            <p class="text-sm text-fg-muted">
                                {entry.object_name.unwrap_or_default()}
                                {entry.check_in.map(|t| format!(" · seit {}", short_time(&t)))}
                            </p>
                        </div>
                        <span class=format!("px-2 py-1 text-xs rounded-full {class}")>{label}</span>
                    </li>
                }
            }).collect_view()}
        </ul>
    }
    .into_view()
}

#[component]
pub fn OverviewTab(vm: AdminViewModel) -> impl IntoView {
    view! {
        <div class="space-y-6">
            {move || match vm.overview_resource.get().flatten() {
                None => view! { <LoadingSpinner /> }.into_view(),
                Some(snapshot) => {
                    let stats = match snapshot.stats {
                        Ok(stats) => stats_cards(stats),
                        Err(err) => {
                            log::error!("dashboard stats failed: {}", err);
                            view! { <ErrorMessage message="Statistiken konnten nicht geladen werden." /> }.into_view()
                        }
                    };
                    let live = match snapshot.live {
                        Ok(entries) => live_list(entries),
                        Err(err) => {
                            log::error!("live status failed: {}", err);
                            view! { <ErrorMessage message="Live-Status konnte nicht geladen werden." /> }.into_view()
                        }
                    };
                    view! {
                        {stats}
                        <div class="bg-surface-elevated rounded-lg shadow p-6">
                            <h2 class="text-xl font-bold text-fg mb-4">"Live-Übersicht"</h2>
                            {live}
                        </div>
                    }
                    .into_view()
                }
            }}
        </div>
    }
}
