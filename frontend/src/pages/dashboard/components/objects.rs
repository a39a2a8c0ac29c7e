use leptos::*;

use crate::{
    api::ApiError,
    components::{empty_state::EmptyState, layout::ErrorMessage},
    pages::dashboard::{repository::TodayObjects, utils},
};

#[component]
pub fn ObjectPicker(
    objects: Resource<(), Result<TodayObjects, ApiError>>,
    selected: RwSignal<Option<i64>>,
    #[prop(into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <label class="block text-sm font-medium text-fg">"Objekt wählen:"</label>
            {move || match objects.get() {
                None => view! { <p class="text-sm text-fg-muted">"Objekte werden geladen..."</p> }.into_view(),
                Some(Err(err)) => {
                    log::error!("objects of today failed: {}", err);
                    view! { <ErrorMessage message="Objekte konnten nicht geladen werden." /> }.into_view()
                }
                Some(Ok(today)) if today.objects.is_empty() => view! {
                    <EmptyState
                        title=today.notice.unwrap_or_else(|| "Keine Objekte für heute geplant".into())
                    />
                }.into_view(),
                Some(Ok(today)) => {
                    let planned = today
                        .objects
                        .iter()
                        .find(|o| Some(o.id) == selected.get_untracked())
                        .and_then(utils::planned_label);
                    view! {
                        <select
                            class="w-full border border-border rounded-md px-3 py-2 bg-surface text-fg"
                            disabled=move || disabled.get()
                            on:change=move |ev| selected.set(event_target_value(&ev).parse().ok())
                        >
                            {today.objects.iter().map(|object| {
                                let id = object.id;
                                view! {
                                    <option value=id.to_string() selected=move || selected.get() == Some(id)>
                                        {utils::object_label(object)}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                        {planned.map(|label| view! { <p class="text-xs text-fg-muted">{label}</p> })}
                    }.into_view()
                }
            }}
        </div>
    }
}
