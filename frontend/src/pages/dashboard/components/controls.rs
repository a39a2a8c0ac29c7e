use leptos::*;

use crate::{
    pages::dashboard::view_model::DashboardViewModel,
    state::time_clock::TimeClock,
};

/// Check-in, pause and check-out buttons for manually tracked employees.
#[component]
pub fn ManualControls(vm: DashboardViewModel) -> impl IntoView {
    let pending = vm.clock_action.pending();
    let working = move || vm.clock.with(TimeClock::is_working);
    let paused = move || vm.clock.with(TimeClock::is_paused);

    view! {
        <div class="space-y-3">
            <Show
                when=working
                fallback=move || view! {
                    <label class="flex items-center gap-2 text-sm text-fg">
                        <input
                            type="checkbox"
                            prop:checked=move || vm.with_colleague.get()
                            on:change=move |ev| vm.with_colleague.set(event_target_checked(&ev))
                        />
                        "Zu zweit arbeiten"
                    </label>
                    <Show when=move || vm.with_colleague.get()>
                        <input
                            type="text"
                            class="w-full border border-border rounded-md px-3 py-2 bg-surface text-fg"
                            placeholder="Name des Kollegen"
                            prop:value=move || vm.colleague.get()
                            on:input=move |ev| vm.colleague.set(event_target_value(&ev))
                        />
                    </Show>
                    <button
                        class="w-full py-4 rounded-lg text-lg font-bold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                        disabled=move || pending.get()
                        on:click=move |_| vm.check_in()
                    >
                        "EINSTEMPELN"
                    </button>
                }
            >
                <div class="grid grid-cols-2 gap-3">
                    <button
                        class="py-3 rounded-lg font-semibold bg-status-warning-bg text-status-warning-text disabled:opacity-50"
                        disabled=move || pending.get()
                        on:click=move |_| vm.toggle_pause()
                    >
                        {move || if paused() { "PAUSE BEENDEN" } else { "PAUSE" }}
                    </button>
                    <button
                        class="py-3 rounded-lg font-semibold bg-action-danger-bg text-action-danger-text hover:bg-action-danger-bg-hover disabled:opacity-50"
                        disabled=move || pending.get()
                        on:click=move |_| vm.check_out()
                    >
                        "AUSSTEMPELN"
                    </button>
                </div>
                <button
                    class="w-full py-2 rounded-lg text-sm border border-border text-fg hover:bg-action-ghost-bg-hover disabled:opacity-50"
                    disabled=move || pending.get() || paused()
                    on:click=move |_| vm.switch_object()
                >
                    "Objekt wechseln"
                </button>
            </Show>
        </div>
    }
}
