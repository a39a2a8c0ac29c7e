use leptos::*;

use crate::state::session::Session;

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

pub fn validate_credentials(email: &str, password: &str) -> Result<(), String> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Bitte E-Mail-Adresse eingeben".into());
    }
    if !email.contains('@') {
        return Err("Bitte eine gültige E-Mail-Adresse eingeben".into());
    }
    if password.is_empty() {
        return Err("Bitte Passwort eingeben".into());
    }
    Ok(())
}

/// Admins start on the admin dashboard, everyone else on the time clock.
pub fn landing_path(session: &Session) -> &'static str {
    if session.is_admin() {
        "/admin"
    } else {
        "/dashboard"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Role;

    #[test]
    fn credentials_require_email_and_password() {
        assert!(validate_credentials("", "x").is_err());
        assert!(validate_credentials("ruza", "x").is_err());
        assert!(validate_credentials("ruza@seda24.de", "").is_err());
        assert!(validate_credentials(" ruza@seda24.de ", "x").is_ok());
    }

    #[test]
    fn admins_land_on_admin_dashboard() {
        let mut session = Session {
            token: "t".into(),
            employee_id: None,
            role: Role::Admin,
            display_name: "Drazen".into(),
            personal_number: None,
            tracking_mode: None,
        };
        assert_eq!(landing_path(&session), "/admin");
        session.role = Role::Employee;
        assert_eq!(landing_path(&session), "/dashboard");
    }
}
