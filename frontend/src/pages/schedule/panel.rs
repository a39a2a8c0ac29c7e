use leptos::*;

use crate::{
    components::{
        error::InlineErrorMessage,
        layout::{ErrorMessage, Layout, LoadingSpinner, SuccessMessage},
    },
    pages::schedule::{
        components::{ConflictPanel, CopyWeekDialog, ShiftDialog, WeekGrid, WeekNavigation},
        view_model::use_schedule_view_model,
    },
};

#[component]
pub fn SchedulePage() -> impl IntoView {
    let vm = use_schedule_view_model();

    // The grid waits until both the week and the conflict check settled.
    let content = move || match vm.week_resource.get() {
        None => view! { <LoadingSpinner /> }.into_view(),
        Some(load) => match load.week {
            Err(err) => {
                log::error!("schedule week failed: {}", err);
                view! { <ErrorMessage message=format!("Dienstplan konnte nicht geladen werden: {}", err.error) /> }
                    .into_view()
            }
            Ok(week) => {
                let employees = week.employees.clone();
                let objects = week.objects.clone();
                view! {
                    <ConflictPanel conflicts=load.conflicts />
                    <WeekGrid week=week vm=vm />
                    <ShiftDialog vm=vm employees=employees objects=objects />
                }
                .into_view()
            }
        },
    };

    view! {
        <Layout title="Dienstplan">
            <div class="space-y-4">
                <h1 class="text-2xl font-bold text-fg">"Dienstplan"</h1>
                <WeekNavigation vm=vm />
                {move || vm.notice.get().map(|text| view! { <SuccessMessage message=text /> })}
                <Show when=move || vm.draft.with(Option::is_none)>
                    <InlineErrorMessage error=vm.message.into() />
                </Show>
                {content}
                <CopyWeekDialog vm=vm />
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::test_support::{
        helpers::{admin_session, provide_auth},
        ssr::render_to_string,
    };
    use leptos_meta::provide_meta_context;

    #[test]
    fn schedule_page_renders_navigation_while_loading() {
        let html = render_to_string(|| {
            provide_meta_context();
            provide_context(ApiClient::new_with_base_url("http://localhost:8001/api/v1"));
            provide_auth(Some(admin_session()));
            view! { <SchedulePage /> }
        });
        assert!(html.contains("Dienstplan"));
        assert!(html.contains("KW "));
        assert!(html.contains("Woche kopieren"));
        assert!(html.contains("Aktualisieren"));
        assert!(html.contains("Heute"));
    }
}
