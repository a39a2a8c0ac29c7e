use super::{
    client::{error_from_status, map_typed_response, ApiClient},
    types::{error_codes, ApiError, LoginRequest, LoginResponse, MyCategory},
};

impl ApiClient {
    /// `POST auth/login`; the only call made without a bearer token.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let url = self.endpoint("auth/login").await;
        let response = self
            .send(self.http_client().post(url).json(request))
            .await?;
        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            let body = response.json::<serde_json::Value>().await.ok();
            let backend = error_from_status(reqwest::StatusCode::UNAUTHORIZED, body.as_ref());
            return Err(ApiError {
                error: "E-Mail oder Passwort ist falsch.".into(),
                code: error_codes::INVALID_CREDENTIALS.into(),
                details: Some(serde_json::json!({ "detail": backend.error })),
            });
        }
        map_typed_response(response).await
    }

    pub async fn get_my_category(&self) -> Result<MyCategory, ApiError> {
        self.get_json("employees/my-category").await
    }
}
