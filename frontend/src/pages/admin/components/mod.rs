use leptos::*;

use crate::{
    api::ApiError,
    components::layout::{ErrorMessage, LoadingSpinner},
};

mod categories;
mod customers;
mod employees;
mod hours;
mod overview;
mod tabs;

pub use categories::CategoriesTab;
pub use customers::CustomersTab;
pub use employees::EmployeesTab;
pub use hours::{CustomerHoursTab, SpecialRulesTab};
pub use overview::OverviewTab;
pub use tabs::AdminTabs;

pub(crate) const INPUT: &str = "w-full border border-border rounded-md px-3 py-2 bg-surface text-fg";
pub(crate) const PRIMARY: &str = "px-4 py-2 rounded-md text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50";
pub(crate) const SECONDARY: &str = "px-4 py-2 rounded-md text-sm border border-border text-fg hover:bg-surface-muted";

/// Loading and error states shared by all list tabs.
pub(crate) fn list_state<T>(
    loaded: Option<Result<Vec<T>, ApiError>>,
    what: &str,
    render: impl FnOnce(Vec<T>) -> View,
) -> View {
    match loaded {
        None => view! { <LoadingSpinner /> }.into_view(),
        Some(Err(err)) => {
            log::error!("{} failed: {}", what, err);
            view! { <ErrorMessage message=format!("{what} konnten nicht geladen werden: {}", err.error) /> }
                .into_view()
        }
        Some(Ok(items)) => render(items),
    }
}

/// Centered modal frame with backdrop.
#[component]
pub(crate) fn Modal(
    #[prop(into)] title: MaybeSignal<String>,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-[60] flex items-center justify-center p-4">
            <button
                type="button"
                aria-label="Schließen"
                class="absolute inset-0 bg-overlay-backdrop"
                on:click=move |_| on_close.call(())
            ></button>
            <div class="relative z-[61] w-full max-w-lg rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-3" role="dialog" aria-modal="true">
                <h3 class="text-lg font-bold text-fg">{move || title.get()}</h3>
                {children()}
            </div>
        </div>
    }
}
