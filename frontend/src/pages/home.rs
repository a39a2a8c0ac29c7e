use crate::{
    components::layout::LoadingSpinner, pages::login::utils::landing_path, state::auth::use_auth,
};
use leptos::*;

/// Where `/` sends the visitor for the current auth state.
pub fn home_target(session: Option<&crate::state::session::Session>) -> &'static str {
    session.map(landing_path).unwrap_or("/login")
}

#[component]
pub fn HomePage() -> impl IntoView {
    let (auth, _) = use_auth();
    create_effect(move |_| {
        let state = auth.get();
        if state.loading {
            return;
        }
        let target = home_target(state.session.as_ref());
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href(target);
        }
    });
    view! { <LoadingSpinner /> }
}
