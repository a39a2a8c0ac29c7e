use crate::{
    api::{ApiClient, ApiError, LoginRequest},
    pages::login::repository::LoginRepository,
    state::session::Session,
};
use leptos::*;
use std::rc::Rc;

pub type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub session: Option<Session>,
    pub is_authenticated: bool,
    pub loading: bool,
}

impl AuthState {
    pub fn from_session(session: Option<Session>) -> Self {
        Self {
            is_authenticated: session.is_some(),
            session,
            loading: false,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.session.as_ref().is_some_and(Session::is_admin)
    }
}

fn create_auth_context() -> AuthContext {
    let api_client = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    create_signal(AuthState::from_session(api_client.session().load()))
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub async fn login_request(
    request: LoginRequest,
    repo: &LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<Session, ApiError> {
    set_auth_state.update(|state| state.loading = true);

    match repo.login(request).await {
        Ok(session) => {
            set_auth_state.set(AuthState::from_session(Some(session.clone())));
            Ok(session)
        }
        Err(error) => {
            set_auth_state.update(|state| state.loading = false);
            Err(error)
        }
    }
}

pub fn logout(repo: &LoginRepository, set_auth_state: WriteSignal<AuthState>) {
    repo.logout();
    set_auth_state.set(AuthState::default());
}

fn login_repository() -> LoginRepository {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    LoginRepository::new_with_client(Rc::new(api))
}

pub fn use_login_action() -> Action<LoginRequest, Result<Session, ApiError>> {
    let (_auth, set_auth) = use_auth();
    let repo = login_repository();

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { login_request(payload, &repo, set_auth).await }
    })
}

pub fn use_logout() -> Callback<()> {
    let (_auth, set_auth) = use_auth();
    let repo = login_repository();
    Callback::new(move |_| logout(&repo, set_auth))
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use serde_json::json;

    #[tokio::test]
    async fn login_and_logout_update_auth_state() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/v1/auth/login");
            then.status(200).json_body(json!({
                "access_token": "jwt",
                "user_name": "Drazen Sertic",
                "role": "admin"
            }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/v1/employees/my-category");
            then.status(200).json_body(json!({ "id": 1, "tracking_mode": "C" }));
        });

        let runtime = create_runtime();
        let (auth, set_auth) = create_signal(AuthState::default());
        let repo = LoginRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api/v1"),
        )));

        login_request(
            LoginRequest {
                email: "drazen@seda24.de".into(),
                password: "secret".into(),
            },
            &repo,
            set_auth,
        )
        .await
        .unwrap();
        assert!(auth.get_untracked().is_authenticated);
        assert!(auth.get_untracked().is_admin());

        logout(&repo, set_auth);
        assert!(!auth.get_untracked().is_authenticated);
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_login_clears_loading_flag() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/v1/auth/login");
            then.status(401).json_body(json!({ "detail": "Incorrect email or password" }));
        });

        let runtime = create_runtime();
        let (auth, set_auth) = create_signal(AuthState::default());
        let repo = LoginRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api/v1"),
        )));

        let err = login_request(
            LoginRequest {
                email: "x@seda24.de".into(),
                password: "nope".into(),
            },
            &repo,
            set_auth,
        )
        .await
        .unwrap_err();
        assert_eq!(err.code, "INVALID_CREDENTIALS");
        assert!(!auth.get_untracked().loading);
        assert!(!auth.get_untracked().is_authenticated);
        runtime.dispose();
    }
}
