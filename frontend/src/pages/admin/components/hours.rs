use leptos::*;

use super::{list_state, INPUT, PRIMARY};
use crate::{
    api::{CustomerHours, SpecialRule},
    components::empty_state::EmptyState,
    pages::admin::view_model::{AdminViewModel, DeleteTarget},
    utils::time::format_hours,
};

#[component]
fn CustomerHoursRow(entry: CustomerHours, vm: AdminViewModel) -> impl IntoView {
    let raw = create_rw_signal(entry.hours.map(|h| h.to_string()).unwrap_or_default());
    let pending = vm.action.pending();
    let id = entry.id;

    view! {
        <div class="flex items-center justify-between gap-4 py-3">
            <span class="font-medium text-fg">{entry.name}</span>
            <div class="flex items-center gap-2">
                <input
                    type="number"
                    step="0.5"
                    min="0"
                    max="24"
                    class="w-24 border border-border rounded-md px-3 py-2 bg-surface text-fg"
                    prop:value=move || raw.get()
                    on:input=move |ev| raw.set(event_target_value(&ev))
                />
                <span class="text-sm text-fg-muted">"Std."</span>
                <button
                    class=PRIMARY
                    disabled=move || pending.get()
                    on:click=move |_| vm.save_customer_hours(id, &raw.get_untracked())
                >
                    "Speichern"
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn CustomerHoursTab(vm: AdminViewModel) -> impl IntoView {
    let rows = move || {
        list_state(vm.customer_hours_resource.get(), "Sollstunden", |entries| {
            if entries.is_empty() {
                return view! { <EmptyState title="Keine Kunden vorhanden" /> }.into_view();
            }
            view! {
                <div class="divide-y divide-border">
                    {entries.into_iter().map(|entry| view! { <CustomerHoursRow entry=entry vm=vm /> }).collect_view()}
                </div>
            }
            .into_view()
        })
    };

    view! {
        <div class="bg-surface-elevated rounded-lg shadow p-6 space-y-4">
            <div>
                <h2 class="text-xl font-bold text-fg">"Sollstunden-Verwaltung"</h2>
                <p class="text-sm text-fg-muted">"Standardstunden pro Kunde und Einsatz"</p>
            </div>
            {rows}
        </div>
    }
}

fn rule_line(rule: &SpecialRule) -> String {
    match rule.standard_hours {
        Some(standard) => format!(
            "{} statt {}",
            format_hours(rule.special_hours),
            format_hours(standard)
        ),
        None => format_hours(rule.special_hours),
    }
}

#[component]
fn SpecialRuleRow(rule: SpecialRule, vm: AdminViewModel) -> impl IntoView {
    let hours = rule_line(&rule);
    let target = DeleteTarget::SpecialRule { id: rule.id };

    view! {
        <tr class="hover:bg-surface-muted">
            <td class="px-4 py-3 text-sm text-fg">{rule.employee_name}</td>
            <td class="px-4 py-3 text-sm text-fg">{rule.customer_name}</td>
            <td class="px-4 py-3 text-sm font-medium">{hours}</td>
            <td class="px-4 py-3 text-sm text-fg-muted">{rule.note.unwrap_or_default()}</td>
            <td class="px-4 py-3 text-sm">
                <button
                    class="text-status-error-text hover:underline"
                    on:click=move |_| vm.request_delete(target.clone())
                >
                    "Löschen"
                </button>
            </td>
        </tr>
    }
}

#[component]
fn SpecialRuleForm(vm: AdminViewModel) -> impl IntoView {
    let form = vm.rule_form;
    let pending = vm.action.pending();
    let parse_id = |raw: String| raw.parse::<i64>().ok();

    let employee_options = move || match vm.employees_resource.get() {
        Some(Ok(employees)) => employees
            .into_iter()
            .map(|employee| {
                let id = employee.id;
                view! {
                    <option value=id.to_string() selected=move || form.employee_id.get() == Some(id)>
                        {employee.display_name()}
                    </option>
                }
            })
            .collect_view(),
        _ => ().into_view(),
    };
    let customer_options = move || match vm.customers_resource.get() {
        Some(Ok(customers)) => customers
            .into_iter()
            .map(|customer| {
                let id = customer.id;
                view! {
                    <option value=id.to_string() selected=move || form.customer_id.get() == Some(id)>
                        {customer.name}
                    </option>
                }
            })
            .collect_view(),
        _ => ().into_view(),
    };

    view! {
        <div class="border border-border rounded-lg p-4 space-y-3">
            <h3 class="font-semibold text-fg">"Neue Sonderregel"</h3>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-3">
                <select class=INPUT on:change=move |ev| form.employee_id.set(parse_id(event_target_value(&ev)))>
                    <option value="" selected=move || form.employee_id.get().is_none()>"-- Mitarbeiter wählen --"</option>
                    {employee_options}
                </select>
                <select class=INPUT on:change=move |ev| form.customer_id.set(parse_id(event_target_value(&ev)))>
                    <option value="" selected=move || form.customer_id.get().is_none()>"-- Kunde wählen --"</option>
                    {customer_options}
                </select>
                <input
                    type="number"
                    step="0.5"
                    min="0"
                    class=INPUT
                    placeholder="Sonderstunden"
                    prop:value=move || form.special_hours.get()
                    on:input=move |ev| form.special_hours.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    class=INPUT
                    placeholder="Notiz (optional)"
                    prop:value=move || form.note.get()
                    on:input=move |ev| form.note.set(event_target_value(&ev))
                />
            </div>
            <div class="flex justify-end">
                <button class=PRIMARY disabled=move || pending.get() on:click=move |_| vm.save_special_rule()>
                    "Regel anlegen"
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn SpecialRulesTab(vm: AdminViewModel) -> impl IntoView {
    let table = move || {
        list_state(vm.special_rules_resource.get(), "Sonderregeln", |rules| {
            if rules.is_empty() {
                return view! { <EmptyState title="Keine Sonderregeln vorhanden" /> }.into_view();
            }
            view! {
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-border">
                        <thead class="bg-surface-muted">
                            <tr>
                                <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Mitarbeiter"</th>
                                <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Kunde"</th>
                                <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Stunden"</th>
                                <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Notiz"</th>
                                <th class="px-4 py-2"></th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            {rules.into_iter().map(|rule| view! { <SpecialRuleRow rule=rule vm=vm /> }).collect_view()}
                        </tbody>
                    </table>
                </div>
            }
            .into_view()
        })
    };

    view! {
        <div class="bg-surface-elevated rounded-lg shadow p-6 space-y-4">
            <h2 class="text-xl font-bold text-fg">"Sonderregeln"</h2>
            <SpecialRuleForm vm=vm />
            {table}
        </div>
    }
}
