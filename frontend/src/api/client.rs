use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{
    api::types::{error_codes, ApiError},
    config,
    state::session::SessionStore,
};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    session: SessionStore,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            session: SessionStore::browser(),
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
            session: SessionStore::in_memory(),
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) async fn endpoint(&self, path: &str) -> String {
        let base = self.resolved_base_url().await;
        format!(
            "{}/{}",
            base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn with_auth(&self, builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        let token = self
            .session
            .token()
            .ok_or_else(|| ApiError::unauthorized("Bitte melde dich erneut an."))?;
        Ok(builder.bearer_auth(token))
    }

    /// Sends a request with the session token; a 401 ends the session.
    pub(crate) async fn send_authorized(
        &self,
        builder: RequestBuilder,
    ) -> Result<Response, ApiError> {
        let response = self.send(self.with_auth(builder)?).await?;
        self.handle_unauthorized_status(response.status());
        Ok(response)
    }

    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let request = builder
            .build()
            .map_err(|e| ApiError::request_failed(format!("Ungültige Anfrage: {}", e)))?;

        if let Some(mocked) = mocked_response(&request) {
            return mocked;
        }

        self.execute(request).await
    }

    #[cfg(target_arch = "wasm32")]
    async fn execute(&self, request: reqwest::Request) -> Result<Response, ApiError> {
        use futures::future::{select, Either};

        let timeout = gloo_timers::future::TimeoutFuture::new(config::request_timeout_ms());
        let call = self.client.execute(request);
        futures::pin_mut!(call);
        match select(call, timeout).await {
            Either::Left((result, _)) => result.map_err(request_error),
            Either::Right(_) => Err(ApiError::timeout()),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn execute(&self, mut request: reqwest::Request) -> Result<Response, ApiError> {
        *request.timeout_mut() = Some(std::time::Duration::from_millis(u64::from(
            config::request_timeout_ms(),
        )));
        self.client.execute(request).await.map_err(|e| {
            if e.is_timeout() {
                ApiError::timeout()
            } else {
                request_error(e)
            }
        })
    }

    fn handle_unauthorized_status(&self, status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            log::warn!("session rejected by backend, signing out");
            self.session.clear();
            redirect_to_login_if_needed();
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.endpoint(path).await;
        let response = self.send_authorized(self.client.get(url)).await?;
        map_typed_response(response).await
    }

    pub(crate) async fn get_json_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.endpoint(path).await;
        let response = self
            .send_authorized(self.client.get(url).query(query))
            .await?;
        map_typed_response(response).await
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path).await;
        let response = self.send_authorized(self.client.post(url).json(body)).await?;
        map_typed_response(response).await
    }

    pub(crate) async fn post_empty<B>(&self, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(path).await;
        let response = self.send_authorized(self.client.post(url).json(body)).await?;
        map_empty_response(response).await
    }

    pub(crate) async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path).await;
        let response = self.send_authorized(self.client.put(url).json(body)).await?;
        map_typed_response(response).await
    }

    pub(crate) async fn put_empty<B>(&self, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(path).await;
        let response = self.send_authorized(self.client.put(url).json(body)).await?;
        map_empty_response(response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = self.endpoint(path).await;
        let response = self.send_authorized(self.client.delete(url)).await?;
        map_empty_response(response).await
    }
}

fn request_error(error: reqwest::Error) -> ApiError {
    ApiError::request_failed(format!("Verbindung zum Server fehlgeschlagen: {}", error))
}

#[cfg(target_arch = "wasm32")]
fn redirect_to_login_if_needed() {
    if let Some(window) = web_sys::window() {
        let location = window.location();
        if let Ok(pathname) = location.pathname() {
            if pathname == "/login" {
                return;
            }
        }
        let _ = location.set_href("/login");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn redirect_to_login_if_needed() {}

pub(crate) async fn map_typed_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_success() {
        response
            .json()
            .await
            .map_err(|e| ApiError::unknown(format!("Antwort konnte nicht gelesen werden: {}", e)))
    } else {
        Err(error_from_response(response).await)
    }
}

pub(crate) async fn map_empty_response(response: Response) -> Result<(), ApiError> {
    if response.status().is_success() {
        Ok(())
    } else {
        Err(error_from_response(response).await)
    }
}

async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();
    let body = response.json::<Value>().await.ok();
    error_from_status(status, body.as_ref())
}

/// Maps a failed backend response (`{"detail": ...}` bodies) to an [`ApiError`].
pub(crate) fn error_from_status(status: StatusCode, body: Option<&Value>) -> ApiError {
    let message = body.and_then(extract_message);
    let code = match status.as_u16() {
        401 => error_codes::UNAUTHORIZED,
        403 => error_codes::FORBIDDEN,
        404 => error_codes::NOT_FOUND,
        422 => error_codes::VALIDATION_ERROR,
        400 | 409 if message.as_deref().is_some_and(is_already_booked_message) => {
            error_codes::ALREADY_BOOKED
        }
        400 | 409 => error_codes::CONFLICT,
        500..=599 => error_codes::SERVER_ERROR,
        _ => error_codes::UNKNOWN,
    };
    let message = message.unwrap_or_else(|| default_message(status));
    let error = ApiError::new(code, message);
    match body.and_then(|b| b.get("detail")).filter(|d| d.is_array()) {
        Some(detail) => {
            let errors: Vec<Value> = detail
                .as_array()
                .into_iter()
                .flatten()
                .filter_map(|item| item.get("msg").cloned())
                .collect();
            error.with_details(serde_json::json!({ "errors": errors }))
        }
        None => error,
    }
}

fn extract_message(body: &Value) -> Option<String> {
    match body.get("detail") {
        Some(Value::String(detail)) => return Some(detail.clone()),
        Some(Value::Array(items)) => {
            let joined = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect::<Vec<_>>()
                .join(", ");
            if !joined.is_empty() {
                return Some(joined);
            }
        }
        _ => {}
    }
    ["message", "error"]
        .iter()
        .find_map(|key| body.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}

fn is_already_booked_message(message: &str) -> bool {
    let lower = message.to_lowercase();
    lower.contains("bereits stunden") || lower.contains("bereits gebucht") || lower.contains("already booked")
}

fn default_message(status: StatusCode) -> String {
    if status.is_server_error() {
        format!("Serverfehler ({}). Bitte später erneut versuchen.", status.as_u16())
    } else {
        format!("Anfrage fehlgeschlagen ({}).", status.as_u16())
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub(crate) trait TestResponder: Send + Sync {
    fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, ApiError>;
}

#[cfg(all(test, not(target_arch = "wasm32")))]
#[derive(Clone, Debug)]
pub(crate) struct MockResponse {
    status: u16,
    body: Value,
}

#[cfg(all(test, not(target_arch = "wasm32")))]
impl MockResponse {
    pub(crate) fn json(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    fn into_response(self) -> Result<Response, ApiError> {
        let bytes = serde_json::to_vec(&self.body).map_err(|e| ApiError::unknown(e.to_string()))?;
        let response = http::Response::builder()
            .status(self.status)
            .header("content-type", "application/json")
            .body(bytes)
            .map_err(|e| ApiError::unknown(e.to_string()))?;
        Ok(Response::from(response))
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
type MockRegistry = std::sync::Mutex<Vec<(String, std::sync::Arc<dyn TestResponder>)>>;

#[cfg(all(test, not(target_arch = "wasm32")))]
fn mock_registry() -> &'static MockRegistry {
    static MOCKS: std::sync::OnceLock<MockRegistry> = std::sync::OnceLock::new();
    MOCKS.get_or_init(|| std::sync::Mutex::new(Vec::new()))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub(crate) fn register_mock(base_url: String, responder: std::sync::Arc<dyn TestResponder>) {
    if let Ok(mut mocks) = mock_registry().lock() {
        mocks.retain(|(base, _)| base != &base_url);
        mocks.push((base_url, responder));
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
fn mocked_response(request: &reqwest::Request) -> Option<Result<Response, ApiError>> {
    let responder = find_mock(request.url().as_str())?;
    Some(responder.respond(request).and_then(MockResponse::into_response))
}

#[cfg(not(all(test, not(target_arch = "wasm32"))))]
fn mocked_response(_request: &reqwest::Request) -> Option<Result<Response, ApiError>> {
    None
}

#[cfg(all(test, not(target_arch = "wasm32")))]
fn find_mock(url: &str) -> Option<std::sync::Arc<dyn TestResponder>> {
    let mocks = mock_registry().lock().ok()?;
    mocks
        .iter()
        .filter(|(base, _)| url.starts_with(base.as_str()))
        .max_by_key(|(base, _)| base.len())
        .map(|(_, responder)| responder.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn detail_string_becomes_message() {
        let err = error_from_status(
            StatusCode::BAD_REQUEST,
            Some(&json!({ "detail": "Kein aktiver Check-in" })),
        );
        assert_eq!(err.error, "Kein aktiver Check-in");
        assert_eq!(err.code, error_codes::CONFLICT);
    }

    #[test]
    fn already_booked_detail_is_distinguished() {
        let err = error_from_status(
            StatusCode::BAD_REQUEST,
            Some(&json!({ "detail": "Du hast heute bereits Stunden für dieses Objekt gebucht" })),
        );
        assert!(err.is_already_booked());
    }

    #[test]
    fn validation_list_is_joined_and_kept_as_details() {
        let err = error_from_status(
            StatusCode::UNPROCESSABLE_ENTITY,
            Some(&json!({ "detail": [
                { "loc": ["body", "object_id"], "msg": "field required" },
                { "loc": ["body", "notes"], "msg": "str type expected" }
            ]})),
        );
        assert_eq!(err.code, error_codes::VALIDATION_ERROR);
        assert_eq!(err.error, "field required, str type expected");
        assert_eq!(
            err.details,
            Some(json!({ "errors": ["field required", "str type expected"] }))
        );
    }

    #[test]
    fn missing_body_uses_status_text() {
        let err = error_from_status(StatusCode::BAD_GATEWAY, None);
        assert_eq!(err.code, error_codes::SERVER_ERROR);
        assert!(err.error.contains("502"));

        let err = error_from_status(StatusCode::UNAUTHORIZED, None);
        assert_eq!(err.code, error_codes::UNAUTHORIZED);
    }
}
