use leptos::*;

use super::list_state;
use crate::{
    api::{EmployeeWithCategory, TrackingMode},
    components::empty_state::EmptyState,
    pages::admin::{utils::category_badge, view_model::AdminViewModel},
};

#[component]
fn CategoryRow(entry: EmployeeWithCategory, vm: AdminViewModel) -> impl IntoView {
    let id = entry.id;
    let mode = entry.tracking_mode;
    let gps = entry.gps_required;
    let (badge_class, badge_label) = category_badge(mode);
    let pending = vm.action.pending();

    view! {
        <tr class="hover:bg-surface-muted">
            <td class="px-4 py-3 font-mono text-sm">{entry.personal_nr.unwrap_or_default()}</td>
            <td class="px-4 py-3 text-sm font-medium text-fg">{entry.name}</td>
            <td class="px-4 py-3">
                <span class=format!("px-3 py-1 rounded-full text-xs font-medium {badge_class}")>{badge_label}</span>
            </td>
            <td class="px-4 py-3">
                <select
                    class="border border-border rounded-md px-2 py-1 bg-surface text-fg text-sm"
                    disabled=move || pending.get()
                    on:change=move |ev| {
                        if let Some(next) = TrackingMode::from_code(&event_target_value(&ev)) {
                            if next != mode {
                                vm.change_category(id, next, gps);
                            }
                        }
                    }
                >
                    {TrackingMode::ALL.into_iter().map(|option| view! {
                        <option value=option.code() selected={option == mode}>
                            {option.label()}
                        </option>
                    }).collect_view()}
                </select>
            </td>
            <td class="px-4 py-3">
                <label class="flex items-center gap-2 text-sm text-fg">
                    <input
                        type="checkbox"
                        prop:checked=gps
                        disabled=move || pending.get()
                        on:change=move |ev| vm.change_category(id, mode, event_target_checked(&ev))
                    />
                    "GPS"
                </label>
            </td>
        </tr>
    }
}

#[component]
pub fn CategoriesTab(vm: AdminViewModel) -> impl IntoView {
    let table = move || {
        list_state(vm.categories_resource.get(), "Kategorien", |entries| {
            if entries.is_empty() {
                return view! { <EmptyState title="Keine Mitarbeiter vorhanden" /> }.into_view();
            }
            view! {
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-border">
                        <thead class="bg-surface-muted">
                            <tr>
                                <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Personal-Nr"</th>
                                <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Name"</th>
                                <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Aktuell"</th>
                                <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Kategorie"</th>
                                <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"GPS-Prüfung"</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            {entries.into_iter().map(|entry| view! { <CategoryRow entry=entry vm=vm /> }).collect_view()}
                        </tbody>
                    </table>
                </div>
            }
            .into_view()
        })
    };

    view! {
        <div class="bg-surface-elevated rounded-lg shadow p-6 space-y-4">
            <div>
                <h2 class="text-xl font-bold text-fg">"Mitarbeiter-Kategorien"</h2>
                <p class="text-sm text-fg-muted">
                    "A: automatisch eingestempelt · B: Anwesenheit per Button · C: normale Zeiterfassung"
                </p>
            </div>
            {table}
        </div>
    }
}
