use leptos::*;

use crate::pages::admin::{utils::AdminTab, view_model::AdminViewModel};

#[component]
pub fn AdminTabs(vm: AdminViewModel) -> impl IntoView {
    view! {
        <nav class="flex flex-wrap gap-1 border-b border-border">
            {AdminTab::ALL
                .into_iter()
                .map(|tab| view! {
                    <button
                        class=move || {
                            if vm.tab.get() == tab {
                                "px-4 py-2 text-sm font-medium border-b-2 border-action-primary-bg text-action-primary-bg"
                            } else {
                                "px-4 py-2 text-sm font-medium text-fg-muted hover:text-fg"
                            }
                        }
                        on:click=move |_| vm.select_tab(tab)
                    >
                        {tab.label()}
                    </button>
                })
                .collect_view()}
        </nav>
    }
}
