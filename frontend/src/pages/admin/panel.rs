use leptos::*;

use crate::{
    components::{confirm_dialog::ConfirmDialog, layout::Layout},
    pages::admin::{
        components::{
            AdminTabs, CategoriesTab, CustomerHoursTab, CustomersTab, EmployeesTab, OverviewTab,
            SpecialRulesTab,
        },
        utils::AdminTab,
        view_model::use_admin_view_model,
    },
};

#[component]
pub fn AdminPage() -> impl IntoView {
    let vm = use_admin_view_model();
    let pending = vm.action.pending();

    let content = move || match vm.tab.get() {
        AdminTab::Overview => view! { <OverviewTab vm=vm /> }.into_view(),
        AdminTab::Employees => view! { <EmployeesTab vm=vm /> }.into_view(),
        AdminTab::Customers => view! { <CustomersTab vm=vm /> }.into_view(),
        AdminTab::CustomerHours => view! { <CustomerHoursTab vm=vm /> }.into_view(),
        AdminTab::SpecialRules => view! { <SpecialRulesTab vm=vm /> }.into_view(),
        AdminTab::Categories => view! { <CategoriesTab vm=vm /> }.into_view(),
    };

    view! {
        <Layout title="Admin">
            <div class="space-y-6">
                <div class="flex flex-wrap items-center justify-between gap-3">
                    <h1 class="text-2xl font-bold text-fg">"SEDA24 Admin"</h1>
                    <div class="flex items-center gap-2">
                        <button
                            class="px-4 py-2 rounded-md text-sm border border-border bg-surface text-fg hover:bg-surface-muted"
                            on:click=move |_| vm.reload()
                        >
                            "Aktualisieren"
                        </button>
                        <a
                            href="/admin/schedule"
                            class="px-4 py-2 rounded-md text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                        >
                            "📅 Dienstplan"
                        </a>
                    </div>
                </div>
                <AdminTabs vm=vm />
                {content}
            </div>
            <ConfirmDialog
                is_open=Signal::derive(move || vm.pending_delete.with(Option::is_some))
                title="Löschen bestätigen"
                message=Signal::derive(move || {
                    vm.pending_delete
                        .get()
                        .map(|target| target.question())
                        .unwrap_or_default()
                })
                confirm_label="Löschen"
                confirm_disabled=Signal::derive(move || pending.get())
                destructive=true
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.cancel_delete())
            />
        </Layout>
    }
}
