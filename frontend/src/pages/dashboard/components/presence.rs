use leptos::*;

use crate::{api::ServiceType, pages::dashboard::view_model::DashboardViewModel};

/// One-tap booking of the planned shift.
#[component]
pub fn PresencePanel(vm: DashboardViewModel) -> impl IntoView {
    let pending = vm.presence_action.pending();
    view! {
        <div class="space-y-4">
            <div class="space-y-1">
                <label class="block text-sm font-medium text-fg">"Leistungsart"</label>
                <select
                    class="w-full border border-border rounded-md px-3 py-2 bg-surface text-fg"
                    on:change=move |ev| {
                        if let Some(kind) = ServiceType::parse(&event_target_value(&ev)) {
                            vm.service_type.set(kind);
                        }
                    }
                >
                    {ServiceType::ALL.into_iter().map(|kind| view! {
                        <option value=kind.as_str() selected=move || vm.service_type.get() == kind>
                            {kind.as_str()}
                        </option>
                    }).collect_view()}
                </select>
            </div>
            <button
                class="w-full py-6 rounded-lg text-xl font-bold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                disabled=move || pending.get()
                on:click=move |_| vm.report_presence()
            >
                {move || vm.presence_label.get()}
            </button>
            <p class="text-xs text-fg-muted text-center">"Du kannst jedes Objekt einmal pro Tag buchen."</p>
        </div>
    }
}

#[component]
pub fn AutomaticInfo() -> impl IntoView {
    view! {
        <div class="rounded-lg p-6 bg-status-success-bg border border-status-success-border text-status-success-text text-center space-y-2">
            <p class="text-xl font-bold">"Vollautomatische Zeiterfassung"</p>
            <p class="text-sm">
                "Deine Arbeitszeiten werden automatisch vom System erfasst. "
                "Du musst nichts tun, das System stempelt dich anhand deines Dienstplans ein und aus."
            </p>
        </div>
    }
}
