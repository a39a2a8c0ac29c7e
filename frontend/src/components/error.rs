use crate::api::{ApiError, ErrorKind};
use leptos::*;

fn hint_for(kind: ErrorKind) -> Option<&'static str> {
    match kind {
        ErrorKind::SessionExpired => Some("Sitzung abgelaufen. Bitte erneut anmelden."),
        ErrorKind::Transient => Some("Bitte später erneut versuchen."),
        _ => None,
    }
}

#[component]
pub fn InlineErrorMessage(error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2">
                <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || error.get().map(|e| {
                    if let Some(errors) = e
                        .details
                        .as_ref()
                        .filter(|_| e.kind() == ErrorKind::Validation)
                        .and_then(|details| details.get("errors"))
                        .and_then(|v| v.as_array())
                    {
                        return view! {
                            <ul class="list-disc list-inside text-sm">
                                {errors.iter().map(|err| {
                                    view! { <li>{err.as_str().unwrap_or_default().to_string()}</li> }
                                }).collect_view()}
                            </ul>
                        }.into_view();
                    }
                    match hint_for(e.kind()) {
                        Some(hint) => view! { <div class="text-xs opacity-75">{hint}</div> }.into_view(),
                        None => ().into_view(),
                    }
                }).unwrap_or_else(|| ().into_view())}
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use serde_json::json;

    #[test]
    fn inline_error_renders_validation_details() {
        let html = render_to_string(move || {
            let error = ApiError::validation("Eingaben prüfen").with_details(json!({
                "errors": ["Vorname fehlt", "Stundenlohn ungültig"]
            }));
            let signal = create_rw_signal(Some(error));
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(html.contains("Eingaben prüfen"));
        assert!(html.contains("Vorname fehlt"));
        assert!(html.contains("Stundenlohn ungültig"));
    }

    #[test]
    fn inline_error_adds_retry_hint_for_transient_failures() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(Some(ApiError::request_failed("Netzwerkfehler")));
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(html.contains("Netzwerkfehler"));
        assert!(html.contains("Bitte später erneut versuchen."));
    }

    #[test]
    fn inline_error_hidden_without_error() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(None::<ApiError>);
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(!html.contains("bg-status-error-bg"));
    }
}
