use leptos::*;

use crate::{
    api::ApiError,
    pages::schedule::utils::{conflict_display, Conflict},
};

#[component]
pub fn ConflictPanel(conflicts: Result<Vec<Conflict>, ApiError>) -> impl IntoView {
    let conflicts = match conflicts {
        Ok(conflicts) => conflicts,
        Err(err) => {
            log::warn!("conflict check unavailable: {}", err);
            return view! {
                <p class="text-sm text-fg-muted">"Konflikte konnten nicht geprüft werden."</p>
            }
            .into_view();
        }
    };
    let Some(display) = conflict_display(&conflicts) else {
        return ().into_view();
    };
    let more = display.remaining_label();

    view! {
        <div class="rounded-md border border-status-warning-border bg-status-warning-bg p-4 space-y-1">
            <p class="font-semibold text-status-warning-text">
                {format!("⚠️ {} Konflikte gefunden", display.total)}
            </p>
            <ul class="list-disc list-inside text-sm text-status-warning-text">
                {display.shown.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
            </ul>
            {more.map(|text| view! { <p class="text-sm text-status-warning-text">{text}</p> })}
        </div>
    }
    .into_view()
}
