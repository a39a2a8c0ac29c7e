use crate::{api::ApiError, components::error::InlineErrorMessage};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginForm(
    email: RwSignal<String>,
    password: RwSignal<String>,
    error: Signal<Option<ApiError>>,
    pending: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">
                        "SEDA24 Zeiterfassung"
                    </h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">
                        "Bitte mit deinem Mitarbeiterkonto anmelden"
                    </p>
                </div>
                <form class="mt-8 space-y-6" on:submit=move |ev| on_submit.call(ev)>
                    <div class="rounded-md shadow-sm -space-y-px">
                        <div>
                            <label for="email" class="sr-only">"E-Mail"</label>
                            <input
                                id="email"
                                name="email"
                                type="email"
                                autocomplete="username"
                                required
                                class="appearance-none rounded-none relative block w-full px-3 py-2 border border-border placeholder-fg-muted text-fg rounded-t-md focus:outline-none focus:z-10 sm:text-sm"
                                placeholder="E-Mail"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label for="password" class="sr-only">"Passwort"</label>
                            <input
                                id="password"
                                name="password"
                                type="password"
                                autocomplete="current-password"
                                required
                                class="appearance-none rounded-none relative block w-full px-3 py-2 border border-border placeholder-fg-muted text-fg rounded-b-md focus:outline-none focus:z-10 sm:text-sm"
                                placeholder="Passwort"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <InlineErrorMessage error=error />

                    <div>
                        <button
                            type="submit"
                            disabled=move || pending.get()
                            class="group relative w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
                        >
                            {move || if pending.get() { "Anmeldung läuft..." } else { "Anmelden" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn login_form_renders_fields_and_error() {
        let html = render_to_string(move || {
            let error = create_rw_signal(Some(ApiError::new(
                "INVALID_CREDENTIALS",
                "E-Mail oder Passwort ist falsch.",
            )));
            view! {
                <LoginForm
                    email=create_rw_signal(String::new())
                    password=create_rw_signal(String::new())
                    error=error.into()
                    pending=Signal::derive(|| false)
                    on_submit=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("SEDA24 Zeiterfassung"));
        assert!(html.contains("type=\"email\""));
        assert!(html.contains("E-Mail oder Passwort ist falsch."));
        assert!(html.contains("Anmelden"));
    }
}
