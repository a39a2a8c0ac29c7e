use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::rc::Rc;

use crate::{
    api::{LoginResponse, MyCategory, Role, TrackingMode},
    utils::storage::{KeyValueStore, MemoryStore},
};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "current_user";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub employee_id: Option<i64>,
    pub role: Role,
    pub display_name: String,
    pub personal_number: Option<String>,
    /// Fetched once after login; `None` until the category call succeeded.
    pub tracking_mode: Option<TrackingMode>,
}

impl Session {
    pub fn from_login(response: &LoginResponse) -> Self {
        Self {
            token: response.access_token.clone(),
            employee_id: None,
            role: response.role,
            display_name: response.user_name.clone(),
            personal_number: response.personal_nr.clone(),
            tracking_mode: None,
        }
    }

    pub fn with_category(mut self, category: &MyCategory) -> Self {
        self.employee_id = Some(category.id);
        self.tracking_mode = Some(category.tracking_mode);
        if self.personal_number.is_none() {
            self.personal_number = category.personal_nr.clone();
        }
        self
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn effective_tracking_mode(&self) -> TrackingMode {
        self.tracking_mode.unwrap_or_default()
    }
}

#[derive(Serialize, Deserialize)]
struct StoredUser {
    employee_id: Option<i64>,
    role: Role,
    display_name: String,
    personal_number: Option<String>,
    tracking_mode: Option<TrackingMode>,
}

/// Persists the signed-in session; shared between the API client and views.
#[derive(Clone)]
pub struct SessionStore {
    backend: Rc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(backend: Rc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryStore::default()))
    }

    #[cfg(target_arch = "wasm32")]
    pub fn browser() -> Self {
        Self::new(Rc::new(crate::utils::storage::BrowserStore))
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn browser() -> Self {
        Self::in_memory()
    }

    pub fn token(&self) -> Option<String> {
        self.backend.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// The stored session, unless missing, unreadable or expired.
    pub fn load(&self) -> Option<Session> {
        let token = self.token()?;
        if is_token_expired(&token, Utc::now()) {
            log::info!("stored token expired, discarding session");
            self.clear();
            return None;
        }
        let user: StoredUser = serde_json::from_str(&self.backend.get(USER_KEY)?).ok()?;
        Some(Session {
            token,
            employee_id: user.employee_id,
            role: user.role,
            display_name: user.display_name,
            personal_number: user.personal_number,
            tracking_mode: user.tracking_mode,
        })
    }

    pub fn persist(&self, session: &Session) {
        let user = StoredUser {
            employee_id: session.employee_id,
            role: session.role,
            display_name: session.display_name.clone(),
            personal_number: session.personal_number.clone(),
            tracking_mode: session.tracking_mode,
        };
        match serde_json::to_string(&user) {
            Ok(raw) => {
                self.backend.set(TOKEN_KEY, &session.token);
                self.backend.set(USER_KEY, &raw);
            }
            Err(err) => log::error!("could not store session: {err}"),
        }
    }

    pub fn clear(&self) {
        self.backend.remove(TOKEN_KEY);
        self.backend.remove(USER_KEY);
    }
}

/// `exp` claim of a JWT, if the token carries one.
pub fn token_expires_at(token: &str) -> Option<DateTime<Utc>> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    let claims: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    let exp = claims.get("exp")?.as_i64()?;
    DateTime::from_timestamp(exp, 0)
}

pub fn is_token_expired(token: &str, now: DateTime<Utc>) -> bool {
    token_expires_at(token).is_some_and(|exp| exp <= now)
}
