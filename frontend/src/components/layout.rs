use crate::state::auth::{self, use_auth};
use leptos::*;
use leptos_meta::Title;

const NAV_LINK: &str =
    "text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover";

#[component]
pub fn Header() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let (menu_open, set_menu_open) = create_signal(false);
    let is_admin = move || auth.get().is_admin();
    let user_name = move || {
        auth.get()
            .session
            .map(|session| session.display_name)
            .unwrap_or_default()
    };
    let logout = auth::use_logout();
    let on_logout = move |_| {
        set_menu_open.set(false);
        logout.call(());
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href("/login");
        }
    };
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);

    let links = move || {
        let mut links = vec![("/dashboard", "Dashboard"), ("/history", "Verlauf")];
        if is_admin() {
            links.push(("/admin", "Admin"));
            links.push(("/admin/schedule", "Dienstplan"));
        }
        links
    };

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center gap-3">
                        <h1 class="text-xl font-semibold text-fg">"SEDA24"</h1>
                        <span class="hidden sm:inline text-sm text-fg-muted">{user_name}</span>
                    </div>
                    <div class="flex items-center">
                        <nav class="hidden lg:flex space-x-4">
                            {move || {
                                links()
                                    .into_iter()
                                    .map(|(href, label)| view! { <a href=href class=NAV_LINK>{label}</a> })
                                    .collect_view()
                            }}
                            <button on:click=on_logout class=NAV_LINK>"Abmelden"</button>
                        </nav>
                        <button
                            type="button"
                            class="lg:hidden inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                            on:click=toggle_menu
                            aria-expanded=move || menu_open.get()
                            aria-controls="mobile-nav"
                        >
                            <span class="sr-only">
                                {move || if menu_open.get() { "Menü schließen" } else { "Menü öffnen" }}
                            </span>
                            <span aria-hidden="true">{move || if menu_open.get() { "✕" } else { "☰" }}</span>
                        </button>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <div id="mobile-nav" class="lg:hidden border-t border-border">
                        <nav class="px-4 py-3 space-y-2">
                            {move || {
                                links()
                                    .into_iter()
                                    .map(|(href, label)| {
                                        view! {
                                            <a
                                                href=href
                                                class=format!("block {NAV_LINK}")
                                                on:click=move |_| set_menu_open.set(false)
                                            >
                                                {label}
                                            </a>
                                        }
                                    })
                                    .collect_view()
                            }}
                            <button on:click=on_logout class=format!("w-full text-left {NAV_LINK}")>
                                "Abmelden"
                            </button>
                        </nav>
                    </div>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(#[prop(optional, into)] title: Option<String>, children: Children) -> impl IntoView {
    let title = title
        .map(|t| format!("{t} | SEDA24 Zeiterfassung"))
        .unwrap_or_else(|| "SEDA24 Zeiterfassung".to_string());
    view! {
        <Title text=title />
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}
