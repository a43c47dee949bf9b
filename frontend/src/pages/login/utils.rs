use crate::api::{ApiError, LoginRequest};
use leptos::*;

pub const MIN_PASSWORD_LEN: usize = 8;

pub const INVALID_EMAIL: &str = "Please enter a valid email address";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters long";
pub const ADMIN_KEY_REQUIRED: &str = "Admin access key is required";

/// `local@domain.tld`: one `@`, no whitespace, and a dot inside the domain.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(idx, ch)| ch == '.' && idx > 0 && idx + 1 < domain.len())
}

pub fn validate_login(email: &str, password: &str, admin_key: &str) -> Result<(), ApiError> {
    if !is_valid_email(email) {
        return Err(ApiError::validation(INVALID_EMAIL));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ApiError::validation(PASSWORD_TOO_SHORT));
    }
    if admin_key.trim().is_empty() {
        return Err(ApiError::validation(ADMIN_KEY_REQUIRED));
    }
    Ok(())
}

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub admin_key: RwSignal<String>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            admin_key: create_rw_signal(String::new()),
        }
    }
}

impl LoginFormState {
    pub fn is_complete(&self) -> bool {
        self.email.with(|v| !v.trim().is_empty())
            && self.password.with(|v| !v.is_empty())
            && self.admin_key.with(|v| !v.trim().is_empty())
    }

    /// Validated request from the current field values.
    pub fn to_request(&self) -> Result<LoginRequest, ApiError> {
        let email = self.email.get_untracked().trim().to_string();
        let password = self.password.get_untracked();
        let admin_key = self.admin_key.get_untracked().trim().to_string();
        validate_login(&email, &password, &admin_key)?;
        Ok(LoginRequest {
            email,
            password,
            admin_key,
        })
    }

    pub fn clear_secrets(&self) {
        self.password.set(String::new());
        self.admin_key.set(String::new());
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn form_state_builds_trimmed_request_and_clears_secrets() {
        with_runtime(|| {
            let form = LoginFormState::default();
            assert!(!form.is_complete());

            form.email.set(" admin@globalclinic.com ".into());
            form.password.set("s3cret-pass".into());
            form.admin_key.set(" K ".into());
            assert!(form.is_complete());

            let request = form.to_request().unwrap();
            assert_eq!(request.email, "admin@globalclinic.com");
            assert_eq!(request.password, "s3cret-pass");
            assert_eq!(request.admin_key, "K");

            form.clear_secrets();
            assert!(form.password.get_untracked().is_empty());
            assert!(form.admin_key.get_untracked().is_empty());
            assert_eq!(form.email.get_untracked(), " admin@globalclinic.com ");
        });
    }

    #[test]
    fn invalid_form_produces_validation_error() {
        with_runtime(|| {
            let form = LoginFormState::default();
            form.email.set("admin@globalclinic.com".into());
            form.password.set("short".into());
            form.admin_key.set("K".into());
            assert_eq!(form.to_request().unwrap_err().error, PASSWORD_TOO_SHORT);
        });
    }
}
