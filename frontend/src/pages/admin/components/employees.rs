use leptos::*;

use super::{list_state, Modal, INPUT, PRIMARY, SECONDARY};
use crate::{
    api::{Employee, TrackingMode},
    pages::admin::{
        utils::{category_badge, filter_employees},
        view_model::{AdminViewModel, DeleteTarget},
    },
};

#[component]
fn EmployeeRow(employee: Employee, vm: AdminViewModel) -> impl IntoView {
    let (badge_class, badge_label) = category_badge(employee.tracking_mode);
    let name = employee.display_name();
    let delete_target = DeleteTarget::Employee {
        id: employee.id,
        name: name.clone(),
    };
    let rate = employee
        .hourly_rate
        .map(|rate| format!("{rate}€/h"))
        .unwrap_or_else(|| "-".into());
    let (status_class, status_label) = if employee.is_active {
        ("bg-status-success-bg text-status-success-text", "Aktiv")
    } else {
        ("bg-status-error-bg text-status-error-text", "Inaktiv")
    };
    let personal_nr = employee.personal_nr.clone().unwrap_or_default();
    let email = employee.email.clone().unwrap_or_default();

    view! {
        <tr class="hover:bg-surface-muted">
            <td class="px-6 py-4 whitespace-nowrap font-mono text-sm">{personal_nr}</td>
            <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-fg">{name}</td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-fg-muted">{email}</td>
            <td class="px-6 py-4 whitespace-nowrap">
                <span class=format!("px-3 py-1 rounded-full text-xs font-medium {badge_class}")>{badge_label}</span>
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm">{rate}</td>
            <td class="px-6 py-4 whitespace-nowrap">
                <span class=format!("px-2 py-1 text-xs rounded-full {status_class}")>{status_label}</span>
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm space-x-3">
                <button class="text-action-primary-bg hover:underline" on:click=move |_| vm.open_edit_employee(&employee)>
                    "Bearbeiten"
                </button>
                <button
                    class="text-status-error-text hover:underline"
                    on:click=move |_| vm.request_delete(delete_target.clone())
                >
                    "Löschen"
                </button>
            </td>
        </tr>
    }
}

#[component]
fn EmployeeDialog(vm: AdminViewModel) -> impl IntoView {
    let form = vm.employee_form;
    let pending = vm.action.pending();
    let title = Signal::derive(move || {
        if vm.editing_employee.get().is_some() {
            "Mitarbeiter bearbeiten".to_string()
        } else {
            "Neuer Mitarbeiter".to_string()
        }
    });
    let text_input = move |signal: RwSignal<String>, placeholder: &'static str| {
        view! {
            <input
                type="text"
                class=INPUT
                placeholder=placeholder
                prop:value=move || signal.get()
                on:input=move |ev| signal.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <Modal title=title on_close=Callback::new(move |_| vm.employee_dialog_open.set(false))>
            <div class="grid grid-cols-2 gap-3">
                {text_input(form.first_name, "Vorname")}
                {text_input(form.last_name, "Nachname")}
            </div>
            {text_input(form.personal_nr, "Personal-Nr")}
            {text_input(form.email, "Email")}
            {text_input(form.hourly_rate, "Stundensatz (€)")}
            <select
                class=INPUT
                on:change=move |ev| {
                    if let Some(mode) = TrackingMode::from_code(&event_target_value(&ev)) {
                        form.tracking_mode.set(mode);
                    }
                }
            >
                {TrackingMode::ALL.into_iter().map(|mode| view! {
                    <option value=mode.code() selected=move || form.tracking_mode.get() == mode>
                        {mode.label()}
                    </option>
                }).collect_view()}
            </select>
            <label class="flex items-center gap-2 text-sm text-fg">
                <input
                    type="checkbox"
                    prop:checked=move || form.gps_required.get()
                    on:change=move |ev| form.gps_required.set(event_target_checked(&ev))
                />
                "GPS-Prüfung erforderlich"
            </label>
            <div class="flex justify-end gap-2">
                <button class=SECONDARY on:click=move |_| vm.employee_dialog_open.set(false)>"Abbrechen"</button>
                <button class=PRIMARY disabled=move || pending.get() on:click=move |_| vm.save_employee()>
                    "Speichern"
                </button>
            </div>
        </Modal>
    }
}

#[component]
pub fn EmployeesTab(vm: AdminViewModel) -> impl IntoView {
    let rows = move || {
        list_state(vm.employees_resource.get(), "Mitarbeiter", |employees| {
            let visible = filter_employees(&employees, &vm.search.get(), vm.category_filter.get());
            view! {
                <table class="w-full">
                    <thead class="bg-surface-muted">
                        <tr>
                            {["Personal-Nr", "Name", "Email", "Kategorie", "Stundensatz", "Status", "Aktionen"]
                                .into_iter()
                                .map(|title| view! {
                                    <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase">{title}</th>
                                })
                                .collect_view()}
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        {visible.into_iter().map(|employee| view! { <EmployeeRow employee=employee vm=vm /> }).collect_view()}
                    </tbody>
                </table>
            }
            .into_view()
        })
    };

    view! {
        <div class="bg-surface-elevated rounded-lg shadow">
            <div class="p-6 border-b border-border flex flex-wrap justify-between items-center gap-3">
                <h2 class="text-xl font-bold text-fg">"Mitarbeiterverwaltung"</h2>
                <div class="flex flex-wrap gap-3">
                    <input
                        type="text"
                        placeholder="Suchen..."
                        class="px-4 py-2 border border-border rounded-lg bg-surface text-fg"
                        prop:value=move || vm.search.get()
                        on:input=move |ev| vm.search.set(event_target_value(&ev))
                    />
                    <select
                        class="px-4 py-2 border border-border rounded-lg bg-surface text-fg"
                        on:change=move |ev| vm.category_filter.set(TrackingMode::from_code(&event_target_value(&ev)))
                    >
                        <option value="all">"Alle Kategorien"</option>
                        {TrackingMode::ALL.into_iter().map(|mode| view! {
                            <option value=mode.code()>{format!("Kategorie {}", mode.code())}</option>
                        }).collect_view()}
                    </select>
                    <button class=PRIMARY on:click=move |_| vm.open_new_employee()>"+ Neuer Mitarbeiter"</button>
                </div>
            </div>
            <div class="overflow-x-auto">{rows}</div>
            <Show when=move || vm.employee_dialog_open.get()>
                <EmployeeDialog vm=vm />
            </Show>
        </div>
    }
}
