use leptos::*;

use crate::pages::schedule::view_model::ScheduleViewModel;

#[component]
pub fn WeekNavigation(vm: ScheduleViewModel) -> impl IntoView {
    let label = vm.week_label();
    let summary = vm.shift_summary();
    let busy = vm.action.pending();
    let button = "px-3 py-2 rounded-md border border-border bg-surface text-fg text-sm hover:bg-surface-muted disabled:opacity-50";

    view! {
        <div class="flex flex-wrap items-center justify-between gap-3">
            <div class="flex items-center gap-2">
                <button class=button aria-label="Vorherige Woche" on:click=move |_| vm.previous_week()>"←"</button>
                <span class="text-lg font-semibold text-fg min-w-[9rem] text-center">{move || label.get()}</span>
                <button class=button aria-label="Nächste Woche" on:click=move |_| vm.next_week()>"→"</button>
                <button class=button on:click=move |_| vm.current_week()>"Heute"</button>
                <span class="text-sm text-fg-muted">{move || summary.get().unwrap_or_default()}</span>
            </div>
            <div class="flex items-center gap-2">
                <button class=button disabled=move || busy.get() on:click=move |_| vm.copy_open.set(true)>
                    "Woche kopieren"
                </button>
                <button class=button on:click=move |_| vm.reload()>"Aktualisieren"</button>
            </div>
        </div>
    }
}
