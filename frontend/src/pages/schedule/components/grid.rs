use leptos::*;

use crate::{
    api::{ScheduledShift, ShiftStatus},
    pages::schedule::{
        utils::{self, DayView, WeekView},
        view_model::ScheduleViewModel,
    },
    utils::time::short_time,
};

#[component]
pub fn WeekGrid(week: WeekView, vm: ScheduleViewModel) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-7 gap-3">
            {week.days.into_iter().map(|day| view! { <DayColumn day=day vm=vm /> }).collect_view()}
        </div>
        <StatusLegend />
    }
}

#[component]
fn DayColumn(day: DayView, vm: ScheduleViewModel) -> impl IntoView {
    let weekday = day.weekday_index;
    view! {
        <div class="bg-surface-elevated rounded-lg shadow p-3 flex flex-col gap-2 min-h-[10rem]">
            <div class="text-center border-b border-border pb-2">
                <div class="font-semibold text-fg">{day.weekday_name.clone()}</div>
                <div class="text-xs text-fg-muted">{day.date.format("%d.%m").to_string()}</div>
            </div>
            {day.shifts.into_iter().map(|shift| view! { <ShiftCard shift=shift weekday=weekday vm=vm /> }).collect_view()}
            <button
                class="mt-auto text-xs text-action-primary-bg hover:underline"
                on:click=move |_| vm.open_add(weekday)
            >
                "+ Schicht hinzufügen"
            </button>
        </div>
    }
}

#[component]
fn ShiftCard(shift: ScheduledShift, weekday: u32, vm: ScheduleViewModel) -> impl IntoView {
    let class = format!(
        "w-full text-left rounded-md border p-2 text-xs space-y-0.5 hover:shadow {}",
        utils::status_class(shift.status)
    );
    let hours = shift
        .planned_hours
        .or_else(|| utils::planned_hours(&shift.start_time, &shift.end_time));
    let times = format!("{} - {}", short_time(&shift.start_time), short_time(&shift.end_time));
    let note = utils::substitution_note(&shift);
    let icon = utils::status_icon(shift.status);
    let header = shift.employee_name.clone();
    let object = shift.object_name.clone();

    view! {
        <button class=class on:click=move |_| vm.open_edit(&shift, weekday)>
            <div class="font-semibold text-fg flex items-center gap-1">
                {icon.map(|icon| view! { <span>{icon}</span> })}
                <span>{header}</span>
            </div>
            <div class="text-fg-muted">{object}</div>
            <div class="text-fg">
                {times}
                {hours.map(|h| format!(" ({h}h)"))}
            </div>
            {note.map(|text| view! { <div class="italic text-fg-muted">{text}</div> })}
        </button>
    }
}

#[component]
pub fn StatusLegend() -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-4 text-xs text-fg-muted">
            {ShiftStatus::ALL.into_iter().map(|status| view! {
                <span class="flex items-center gap-1">
                    <span class=format!("inline-block w-3 h-3 rounded border {}", utils::status_class(status))></span>
                    {status.label()}
                </span>
            }).collect_view()}
        </div>
    }
}
