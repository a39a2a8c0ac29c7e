use leptos::*;

use super::{list_state, Modal, INPUT, PRIMARY, SECONDARY};
use crate::{
    api::Customer,
    components::empty_state::EmptyState,
    pages::admin::{
        utils::BILLING_TYPES,
        view_model::{AdminViewModel, DeleteTarget},
    },
};

fn rate_line(customer: &Customer) -> Option<String> {
    match (customer.hourly_rate, customer.monthly_rate) {
        (Some(hourly), _) => Some(format!("{hourly}€/h")),
        (None, Some(monthly)) => Some(format!("{monthly}€/Monat")),
        (None, None) => None,
    }
}

#[component]
fn CustomerCard(customer: Customer, vm: AdminViewModel) -> impl IntoView {
    let delete_target = DeleteTarget::Customer {
        id: customer.id,
        name: customer.name.clone(),
    };
    let name = customer.name.clone();
    let address = customer.address.clone().unwrap_or_default();
    let contact = customer
        .contact_person
        .clone()
        .map(|person| match &customer.phone {
            Some(phone) => format!("{person} · {phone}"),
            None => person,
        });
    let rate = rate_line(&customer);
    let inactive = !customer.is_active;

    view! {
        <div class="border border-border rounded-lg p-4 space-y-1">
            <h3 class="font-semibold text-lg text-fg">{name}</h3>
            <p class="text-sm text-fg-muted">{address}</p>
            {contact.map(|line| view! { <p class="text-sm text-fg-muted">{line}</p> })}
            {rate.map(|line| view! { <p class="text-sm font-medium text-fg">{line}</p> })}
            {inactive.then(|| view! { <span class="text-xs text-status-error-text">"Inaktiv"</span> })}
            <div class="flex gap-3 pt-2 text-sm">
                <button class="text-action-primary-bg hover:underline" on:click=move |_| vm.open_edit_customer(&customer)>
                    "Bearbeiten"
                </button>
                <button
                    class="text-status-error-text hover:underline"
                    on:click=move |_| vm.request_delete(delete_target.clone())
                >
                    "Löschen"
                </button>
            </div>
        </div>
    }
}

#[component]
fn CustomerDialog(vm: AdminViewModel) -> impl IntoView {
    let form = vm.customer_form;
    let pending = vm.action.pending();
    let title = Signal::derive(move || {
        if vm.editing_customer.get().is_some() {
            "Kunde bearbeiten".to_string()
        } else {
            "Neuer Kunde".to_string()
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
        <Modal title=title on_close=Callback::new(move |_| vm.customer_dialog_open.set(false))>
            {text_input(form.name, "Firmenname/Objektname")}
            {text_input(form.address, "Adresse")}
            {text_input(form.contact_person, "Ansprechpartner")}
            {text_input(form.phone, "Telefonnummer")}
            <select class=INPUT on:change=move |ev| form.billing_type.set(event_target_value(&ev))>
                {BILLING_TYPES.into_iter().map(|(value, label)| view! {
                    <option value=value selected=move || form.billing_type.get() == value>{label}</option>
                }).collect_view()}
            </select>
            <div class="grid grid-cols-2 gap-3">
                {text_input(form.hourly_rate, "Stundensatz (€) - optional")}
                {text_input(form.monthly_rate, "Monatspauschale (€) - optional")}
            </div>
            <label class="flex items-center gap-2 text-sm text-fg">
                <input
                    type="checkbox"
                    prop:checked=move || form.is_active.get()
                    on:change=move |ev| form.is_active.set(event_target_checked(&ev))
                />
                "Aktiv"
            </label>
            <div class="flex justify-end gap-2">
                <button class=SECONDARY on:click=move |_| vm.customer_dialog_open.set(false)>"Abbrechen"</button>
                <button class=PRIMARY disabled=move || pending.get() on:click=move |_| vm.save_customer()>
                    "Speichern"
                </button>
            </div>
        </Modal>
    }
}

#[component]
pub fn CustomersTab(vm: AdminViewModel) -> impl IntoView {
    let cards = move || {
        list_state(vm.customers_resource.get(), "Kunden", |customers| {
            if customers.is_empty() {
                return view! { <EmptyState title="Noch keine Kunden angelegt" /> }.into_view();
            }
            view! {
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                    {customers.into_iter().map(|customer| view! { <CustomerCard customer=customer vm=vm /> }).collect_view()}
                </div>
            }
            .into_view()
        })
    };

    view! {
        <div class="bg-surface-elevated rounded-lg shadow">
            <div class="p-6 border-b border-border flex justify-between items-center">
                <h2 class="text-xl font-bold text-fg">"Kundenverwaltung"</h2>
                <button class=PRIMARY on:click=move |_| vm.open_new_customer()>"+ Neuer Kunde"</button>
            </div>
            <div class="p-6">{cards}</div>
            <Show when=move || vm.customer_dialog_open.get()>
                <CustomerDialog vm=vm />
            </Show>
        </div>
    }
}
