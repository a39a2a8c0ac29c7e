use chrono::{DateTime, Utc};
use leptos::*;

use crate::{
    config,
    state::time_clock::TimeClock,
    utils::time::{format_hms, weekday_name},
};
use chrono::Datelike;

/// Wall clock in the app time zone, driven by the view model's tick.
#[component]
pub fn Clock(now: RwSignal<DateTime<Utc>>) -> impl IntoView {
    let local = move || now.get().with_timezone(&config::current_time_zone());
    let date_str = move || {
        let t = local();
        format!(
            "{}, {}",
            weekday_name(t.weekday().num_days_from_monday()),
            t.format("%d.%m.%Y")
        )
    };
    let time_str = move || local().format("%H:%M:%S").to_string();

    view! {
        <div class="bg-gradient-to-br from-action-primary-bg to-action-primary-bg-hover text-text-inverse shadow-lg rounded-lg overflow-hidden">
            <div class="flex flex-col items-center justify-center py-4 space-y-2">
                <div class="text-lg font-medium opacity-90">{date_str}</div>
                <div class="text-4xl font-bold tracking-wider font-mono">{time_str}</div>
            </div>
        </div>
    }
}

#[component]
pub fn WorkTimer(clock: RwSignal<TimeClock>, elapsed: Signal<i64>) -> impl IntoView {
    let status = move || {
        clock.with(|c| match c {
            TimeClock::Idle => "Nicht eingestempelt",
            TimeClock::Working(entry) if entry.pause.is_some() => "Pause",
            TimeClock::Working(_) => "Eingestempelt",
        })
    };
    let object = move || {
        clock.with(|c| {
            c.active()
                .and_then(|entry| entry.object_name.clone())
                .map(|name| format!("Objekt: {name}"))
        })
    };

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 text-center space-y-2">
            <p class="text-sm text-fg-muted">{status}</p>
            <p class="text-5xl font-mono font-bold text-fg">{move || format_hms(elapsed.get())}</p>
            <p class="text-sm text-fg-muted">{object}</p>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use chrono::TimeZone;

    #[test]
    fn clock_renders_german_weekday() {
        let html = render_to_string(move || {
            // 2025-07-01 is a Tuesday; 10:00Z is 12:00 in Berlin.
            let now = create_rw_signal(Utc.with_ymd_and_hms(2025, 7, 1, 10, 0, 0).unwrap());
            view! { <Clock now=now /> }
        });
        assert!(html.contains("Dienstag, 01.07.2025"));
        assert!(html.contains("12:00:00"));
    }

    #[test]
    fn work_timer_shows_pause_state() {
        let html = render_to_string(move || {
            let start = Utc.with_ymd_and_hms(2025, 7, 1, 6, 0, 0).unwrap();
            let mut working = TimeClock::Idle;
            working.check_in(Some(1), 5, start).unwrap();
            working
                .pause_start(Some(2), start + chrono::Duration::hours(1))
                .unwrap();
            let clock = create_rw_signal(working);
            view! { <WorkTimer clock=clock elapsed=Signal::derive(|| 3_600) /> }
        });
        assert!(html.contains("Pause"));
        assert!(html.contains("01:00:00"));
    }
}
