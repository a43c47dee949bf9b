use super::utils::LoginFormState;
use crate::api::{ApiError, LoginRequest};
use crate::state::auth;
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub error: RwSignal<Option<ApiError>>,
    pub login_action: Action<LoginRequest, Result<(), ApiError>>,
}

impl LoginViewModel {
    pub fn can_submit(&self) -> bool {
        !self.login_action.pending().get() && self.form.is_complete()
    }

    /// Validates locally first; nothing is sent while a field is invalid.
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        match self.form.to_request() {
            Ok(request) => {
                self.error.set(None);
                self.login_action.dispatch(request);
            }
            Err(err) => self.error.set(Some(err)),
        }
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let form = LoginFormState::default();
    let error = create_rw_signal(None::<ApiError>);
    let login_action = auth::use_login_action();

    // On success the session state changes and the anonymous-only route moves on.
    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(()) => {
                    error.set(None);
                    form.clear_secrets();
                }
                Err(err) => {
                    log::warn!("Admin login failed: {}", err.code);
                    error.set(Some(err));
                }
            }
        }
    });

    LoginViewModel {
        form,
        error,
        login_action,
    }
}
