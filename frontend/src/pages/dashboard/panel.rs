use crate::{
    api::TrackingMode,
    components::{
        error::InlineErrorMessage,
        layout::{Layout, SuccessMessage},
    },
    pages::dashboard::{
        components::{
            AutomaticInfo, Clock, HoursSummary, ManualControls, ObjectPicker, PresencePanel,
            WorkTimer,
        },
        view_model::use_dashboard_view_model,
    },
    state::time_clock::TimeClock,
};
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();
    let elapsed = vm.elapsed_seconds();
    let working = Signal::derive(move || vm.clock.with(TimeClock::is_working));

    let controls = move || match vm.mode.get() {
        TrackingMode::Automatic => view! { <AutomaticInfo /> }.into_view(),
        TrackingMode::OneTap => view! {
            <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                <ObjectPicker objects=vm.objects_resource selected=vm.selected_object disabled=false />
                <PresencePanel vm=vm />
            </div>
        }
        .into_view(),
        TrackingMode::Manual => view! {
            <WorkTimer clock=vm.clock elapsed=elapsed />
            <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                <ObjectPicker objects=vm.objects_resource selected=vm.selected_object disabled=working />
                <ManualControls vm=vm />
            </div>
        }
        .into_view(),
    };

    view! {
        <Layout title="Dashboard">
            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <div class="lg:col-span-2 space-y-6">
                    <InlineErrorMessage error=vm.message.into() />
                    {move || vm.notice.get().map(|text| view! { <SuccessMessage message=text /> })}
                    {controls}
                    <HoursSummary totals=vm.totals_resource />
                </div>
                <div class="space-y-6">
                    <Clock now=vm.now />
                    <p class="text-sm text-fg-muted text-center">{move || vm.mode.get().label()}</p>
                </div>
            </div>
        </Layout>
    }
}
