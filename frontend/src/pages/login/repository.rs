use std::rc::Rc;

use crate::{
    api::{ApiClient, ApiError, LoginRequest},
    state::session::Session,
};

#[derive(Clone)]
pub struct LoginRepository {
    client: Rc<ApiClient>,
}

impl LoginRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    /// Signs in, stores the session and enriches it with the tracking category.
    pub async fn login(&self, request: LoginRequest) -> Result<Session, ApiError> {
        let response = self.client.login(&request).await?;
        let session = Session::from_login(&response);
        self.client.session().persist(&session);

        let session = match self.client.get_my_category().await {
            Ok(category) => session.with_category(&category),
            Err(err) => {
                log::warn!("tracking category unavailable, defaulting to manual: {}", err);
                session
            }
        };
        self.client.session().persist(&session);
        Ok(session)
    }

    /// The backend has no logout endpoint; dropping the token ends the session.
    pub fn logout(&self) {
        self.client.session().clear();
    }
}
