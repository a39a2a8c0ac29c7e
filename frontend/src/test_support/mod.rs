#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{Role, TrackingMode};
    use crate::state::{auth::AuthState, session::Session};
    use leptos::*;

    pub fn admin_session() -> Session {
        Session {
            token: "admin-token".into(),
            employee_id: Some(1),
            role: Role::Admin,
            display_name: "Drazen Sertic".into(),
            personal_number: None,
            tracking_mode: None,
        }
    }

    pub fn employee_session(mode: TrackingMode) -> Session {
        Session {
            token: "employee-token".into(),
            employee_id: Some(4),
            role: Role::Employee,
            display_name: "Ruza Kovac".into(),
            personal_number: Some("1004".into()),
            tracking_mode: Some(mode),
        }
    }

    pub fn provide_auth(session: Option<Session>) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(AuthState::from_session(session));
        provide_context((auth, set_auth));
        (auth, set_auth)
    }
}
