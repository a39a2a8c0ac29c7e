use leptos::*;

use crate::{
    api::{ScheduleEmployee, ScheduleObject, ShiftStatus},
    components::{confirm_dialog::ConfirmDialog, error::InlineErrorMessage},
    pages::schedule::{utils, view_model::ScheduleViewModel},
    utils::time::weekday_name,
};

const INPUT: &str = "w-full border border-border rounded-md px-3 py-2 bg-surface text-fg";
const LABEL: &str = "block text-sm font-medium text-fg mb-1";

fn employee_option(employee: &ScheduleEmployee) -> String {
    match &employee.personal_nr {
        Some(nr) => format!("{nr} - {}", employee.name),
        None => employee.name.clone(),
    }
}

fn object_option(object: &ScheduleObject) -> String {
    match &object.customer_name {
        Some(customer) => format!("{} ({customer})", object.name),
        None => object.name.clone(),
    }
}

/// Add and edit dialog; edit mode adds status and delete.
#[component]
pub fn ShiftDialog(
    vm: ScheduleViewModel,
    employees: Vec<ScheduleEmployee>,
    objects: Vec<ScheduleObject>,
) -> impl IntoView {
    let draft = vm.draft;
    let pending = vm.action.pending();
    let is_edit = Signal::derive(move || draft.with(|d| d.as_ref().is_some_and(|d| d.is_edit())));
    let title = move || {
        draft.with(|d| {
            d.as_ref().map(|d| {
                let day = weekday_name(d.weekday);
                if d.is_edit() {
                    format!("Schicht bearbeiten - {day}")
                } else {
                    format!("Neue Schicht hinzufügen - {day}")
                }
            })
        })
    };
    let preview = move || {
        draft.with(|d| d.as_ref().map(|d| utils::format_preview(d.preview())))
    };
    let selected_employee = move || draft.with(|d| d.as_ref().and_then(|d| d.employee_id));
    let selected_object = move || draft.with(|d| d.as_ref().and_then(|d| d.object_id));
    let start = move || draft.with(|d| d.as_ref().map(|d| d.start_time.clone()).unwrap_or_default());
    let end = move || draft.with(|d| d.as_ref().map(|d| d.end_time.clone()).unwrap_or_default());
    let status = move || draft.with(|d| d.as_ref().map(|d| d.status).unwrap_or_default());

    view! {
        <Show when=move || draft.with(Option::is_some)>
            <div class="fixed inset-0 z-[60] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Schließen"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| vm.close_draft()
                ></button>
                <div class="relative z-[61] w-full max-w-lg rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4" role="dialog" aria-modal="true">
                    <h3 class="text-lg font-semibold text-fg">{title}</h3>
                    <InlineErrorMessage error=vm.message.into() />
                    <div>
                        <label class=LABEL>"Mitarbeiter"</label>
                        <select
                            class=INPUT
                            on:change=move |ev| {
                                let id = event_target_value(&ev).parse::<i64>().ok();
                                vm.update_draft(|d| d.employee_id = id);
                            }
                        >
                            <option value="" selected=move || selected_employee().is_none()>"-- Mitarbeiter wählen --"</option>
                            {employees.iter().map(|employee| {
                                let id = employee.id;
                                view! {
                                    <option value=id.to_string() selected=move || selected_employee() == Some(id)>
                                        {employee_option(employee)}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                    </div>
                    <div>
                        <label class=LABEL>"Objekt"</label>
                        <select
                            class=INPUT
                            on:change=move |ev| {
                                let id = event_target_value(&ev).parse::<i64>().ok();
                                vm.update_draft(|d| d.object_id = id);
                            }
                        >
                            <option value="" selected=move || selected_object().is_none()>"-- Objekt wählen --"</option>
                            {objects.iter().map(|object| {
                                let id = object.id;
                                view! {
                                    <option value=id.to_string() selected=move || selected_object() == Some(id)>
                                        {object_option(object)}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                    </div>
                    <div class="grid grid-cols-2 gap-3">
                        <div>
                            <label class=LABEL>"Von"</label>
                            <input
                                type="time"
                                class=INPUT
                                prop:value=start
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    vm.update_draft(|d| d.start_time = value);
                                }
                            />
                        </div>
                        <div>
                            <label class=LABEL>"Bis"</label>
                            <input
                                type="time"
                                class=INPUT
                                prop:value=end
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    vm.update_draft(|d| d.end_time = value);
                                }
                            />
                        </div>
                    </div>
                    <Show when=move || is_edit.get()>
                        <div>
                            <label class=LABEL>"Status"</label>
                            <select
                                class=INPUT
                                on:change=move |ev| {
                                    if let Some(next) = ShiftStatus::from_wire(&event_target_value(&ev)) {
                                        vm.update_draft(|d| d.status = next);
                                    }
                                }
                            >
                                {ShiftStatus::ALL.into_iter().map(|option| view! {
                                    <option value=option.as_wire() selected=move || status() == option>
                                        {option.label()}
                                    </option>
                                }).collect_view()}
                            </select>
                        </div>
                    </Show>
                    <p class="text-sm text-fg-muted">"Geplante Stunden: " {preview}</p>
                    <div class="flex justify-between gap-2">
                        <div>
                            <Show when=move || is_edit.get()>
                                <button
                                    class="px-4 py-2 rounded-md text-sm font-semibold bg-action-danger-bg text-action-danger-text hover:bg-action-danger-bg-hover"
                                    on:click=move |_| vm.request_delete()
                                >
                                    "Löschen"
                                </button>
                            </Show>
                        </div>
                        <div class="flex gap-2">
                            <button
                                class="px-4 py-2 rounded-md text-sm border border-border text-fg hover:bg-surface-muted"
                                on:click=move |_| vm.close_draft()
                            >
                                "Abbrechen"
                            </button>
                            <button
                                class="px-4 py-2 rounded-md text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                                disabled=move || pending.get()
                                on:click=move |_| vm.save_draft()
                            >
                                {move || if is_edit.get() { "Speichern" } else { "Hinzufügen" }}
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
        <ConfirmDialog
            is_open=Signal::derive(move || vm.pending_delete.get().is_some())
            title="Schicht löschen"
            message="Schicht wirklich löschen?"
            confirm_label="Löschen"
            confirm_disabled=Signal::derive(move || pending.get())
            destructive=true
            on_confirm=Callback::new(move |_| vm.confirm_delete())
            on_cancel=Callback::new(move |_| vm.cancel_delete())
        />
    }
}

#[component]
pub fn CopyWeekDialog(vm: ScheduleViewModel) -> impl IntoView {
    let label = vm.week_label();
    let pending = vm.action.pending();

    view! {
        <Show when=move || vm.copy_open.get()>
            <div class="fixed inset-0 z-[60] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Schließen"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| vm.copy_open.set(false)
                ></button>
                <div class="relative z-[61] w-full max-w-sm rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-3" role="dialog" aria-modal="true">
                    <h3 class="text-lg font-semibold text-fg">
                        {move || format!("Kopiere {} in welche Woche?", label.get())}
                    </h3>
                    {move || utils::copy_targets(vm.week_offset.get()).into_iter().map(|(target, text)| view! {
                        <button
                            class="w-full px-4 py-2 rounded-md text-sm border border-border text-fg hover:bg-surface-muted disabled:opacity-50"
                            disabled=move || pending.get()
                            on:click=move |_| vm.copy_to(target)
                        >
                            {text}
                        </button>
                    }).collect_view()}
                    <button
                        class="w-full px-4 py-2 rounded-md text-sm text-fg-muted hover:underline"
                        on:click=move |_| vm.copy_open.set(false)
                    >
                        "Abbrechen"
                    </button>
                </div>
            </div>
        </Show>
    }
}
