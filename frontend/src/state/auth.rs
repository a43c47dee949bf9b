use std::rc::Rc;

use leptos::*;
use log::{debug, info, warn};
use thiserror::Error;

use crate::{
    api::{self, ApiClient, ApiError, LoginRequest},
    utils::storage::{default_session_store, SessionStore, StorageError, StoredSession},
};

pub const ADMIN_ROLE: &str = "admin";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    Admin,
    Other(String),
}

impl Role {
    pub fn parse(raw: &str) -> Self {
        if raw == ADMIN_ROLE {
            Self::Admin
        } else {
            Self::Other(raw.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => ADMIN_ROLE,
            Self::Other(raw) => raw,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Admin session credentials are incomplete")]
    MissingCredentials,
    #[error("Unauthorized: Admin access required")]
    UnauthorizedRole,
    #[error("Access token is malformed")]
    MalformedToken,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<SessionError> for ApiError {
    fn from(error: SessionError) -> Self {
        match error {
            SessionError::UnauthorizedRole => ApiError {
                error: error.to_string(),
                code: api::CODE_UNAUTHORIZED_ROLE.to_string(),
                details: None,
            },
            SessionError::MissingCredentials | SessionError::MalformedToken => {
                ApiError::invalid_response(error.to_string())
            }
            SessionError::Storage(_) => ApiError::unknown(error.to_string()),
        }
    }
}

/// Credentials of an authenticated admin as held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSession {
    pub token: String,
    pub user_id: String,
    pub role: Role,
    pub admin_key: String,
}

impl AdminSession {
    fn to_stored(&self) -> StoredSession {
        StoredSession {
            token: Some(self.token.clone()),
            user_id: Some(self.user_id.clone()),
            role: Some(self.role.as_str().to_string()),
            admin_key: Some(self.admin_key.clone()),
        }
    }
}

/// Input to [`SessionGuard::login`], shaped after the login API response plus
/// the admin key the operator entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    pub access_token: String,
    pub user_id: String,
    pub role: String,
    pub admin_key: String,
}

impl AdminCredentials {
    pub fn from_login(response: api::LoginResponse, admin_key: impl Into<String>) -> Self {
        Self {
            access_token: response.access_token,
            user_id: response.user_id,
            role: response.role,
            admin_key: admin_key.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<AdminSession>,
    pub is_authenticated: bool,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self::pending()
    }
}

impl AuthState {
    /// Shape before the stored session has been read.
    pub fn pending() -> Self {
        Self {
            session: None,
            is_authenticated: false,
            loading: true,
        }
    }

    pub fn anonymous() -> Self {
        Self {
            session: None,
            is_authenticated: false,
            loading: false,
        }
    }

    pub fn authenticated(session: AdminSession) -> Self {
        Self {
            session: Some(session),
            is_authenticated: true,
            loading: false,
        }
    }

    pub fn role(&self) -> Option<&Role> {
        self.session.as_ref().map(|session| &session.role)
    }

    pub fn is_admin(&self) -> bool {
        self.role().map(Role::is_admin).unwrap_or(false)
    }

    pub fn has_admin_key(&self) -> bool {
        self.session
            .as_ref()
            .map(|session| !session.admin_key.is_empty())
            .unwrap_or(false)
    }
}

/// Shape check only: `header.payload.signature`. Nothing is decoded or verified.
pub fn is_structurally_valid_token(token: &str) -> bool {
    token.split('.').count() == 3
}

fn required(value: Option<&str>) -> Result<&str, SessionError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(SessionError::MissingCredentials),
    }
}

/// Applies the stored-session policy: all fields present, admin role, token shape.
pub fn validate_stored_session(stored: &StoredSession) -> Result<AdminSession, SessionError> {
    let token = required(stored.token.as_deref())?;
    let user_id = required(stored.user_id.as_deref())?;
    let role = required(stored.role.as_deref())?;
    let admin_key = required(stored.admin_key.as_deref())?;

    let role = Role::parse(role);
    if !role.is_admin() {
        return Err(SessionError::UnauthorizedRole);
    }
    if !is_structurally_valid_token(token) {
        return Err(SessionError::MalformedToken);
    }

    Ok(AdminSession {
        token: token.to_string(),
        user_id: user_id.to_string(),
        role,
        admin_key: admin_key.to_string(),
    })
}

fn validate_credentials(credentials: &AdminCredentials) -> Result<AdminSession, SessionError> {
    if !Role::parse(&credentials.role).is_admin() {
        return Err(SessionError::UnauthorizedRole);
    }
    validate_stored_session(&StoredSession {
        token: Some(credentials.access_token.clone()),
        user_id: Some(credentials.user_id.clone()),
        role: Some(credentials.role.clone()),
        admin_key: Some(credentials.admin_key.clone()),
    })
}

/// Owns the admin session. Every mutation of [`AuthState`] goes through here.
#[derive(Clone)]
pub struct SessionGuard {
    store: Rc<dyn SessionStore>,
    state: RwSignal<AuthState>,
}

impl SessionGuard {
    pub fn new(store: Rc<dyn SessionStore>) -> Self {
        Self {
            store,
            state: create_rw_signal(AuthState::pending()),
        }
    }

    /// Guard that skips the loading phase and starts anonymous.
    pub fn detached() -> Self {
        let guard = Self::new(default_session_store());
        guard.state.set(AuthState::anonymous());
        guard
    }

    pub fn store(&self) -> Rc<dyn SessionStore> {
        Rc::clone(&self.store)
    }

    pub fn state(&self) -> Signal<AuthState> {
        self.state.into()
    }

    pub fn current_session(&self) -> AuthState {
        self.state.get_untracked()
    }

    #[cfg(test)]
    pub fn overwrite_state_for_test(&self, state: AuthState) {
        self.state.set(state);
    }

    pub fn initialize(&self) {
        let next = match validate_stored_session(&self.store.load()) {
            Ok(session) => {
                info!("Restored admin session for user {}", session.user_id);
                AuthState::authenticated(session)
            }
            Err(err) => {
                debug!("Stored admin session rejected: {}", err);
                self.store.clear();
                AuthState::anonymous()
            }
        };
        self.state.set(next);
    }

    pub fn login(&self, credentials: AdminCredentials) -> Result<(), SessionError> {
        let session = validate_credentials(&credentials).inspect_err(|err| {
            warn!("Admin login rejected: {}", err);
        })?;
        if let Err(err) = self.store.save(&session.to_stored()) {
            warn!("Admin login not persisted: {}", err);
            self.store.clear();
            return Err(err.into());
        }
        info!("Admin {} signed in", session.user_id);
        self.state.set(AuthState::authenticated(session));
        Ok(())
    }

    pub fn logout(&self) {
        self.store.clear();
        if self.state.with_untracked(|state| state.session.is_some()) {
            info!("Admin session cleared");
        }
        self.state.set(AuthState::anonymous());
    }
}

#[component]
pub fn AuthProvider(
    #[prop(optional)] store: Option<Rc<dyn SessionStore>>,
    children: Children,
) -> impl IntoView {
    let guard = SessionGuard::new(store.unwrap_or_else(default_session_store));
    provide_context(guard.clone());
    provide_context(ApiClient::new(guard.clone()));

    // Effects only run in the browser; server renders keep the pending state.
    create_effect(move |_| guard.initialize());

    view! { <>{children()}</> }
}

pub fn use_session_guard() -> SessionGuard {
    use_context::<SessionGuard>().unwrap_or_else(SessionGuard::detached)
}

pub fn use_auth() -> Signal<AuthState> {
    use_session_guard().state()
}

/// Calls the login API and, for an admin response, stores the session.
pub async fn login_request(
    request: LoginRequest,
    api: &ApiClient,
    guard: &SessionGuard,
) -> Result<(), ApiError> {
    let admin_key = request.admin_key.clone();
    let response = api.login(&request).await?;
    guard.login(AdminCredentials::from_login(response, admin_key))?;
    Ok(())
}

pub fn use_login_action() -> Action<LoginRequest, Result<(), ApiError>> {
    let guard = use_session_guard();
    let api = api::use_api_client();

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let api = api.clone();
        let guard = guard.clone();
        async move { login_request(payload, &api, &guard).await }
    })
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::components::guard::{require_anonymous, RouteDecision};
    use crate::test_support::ssr::with_runtime;
    use crate::utils::storage::{MemorySessionStore, ACCESS_TOKEN_KEY, ADMIN_KEY_KEY};
    use httpmock::prelude::*;

    #[tokio::test]
    async fn login_request_stores_admin_session() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST)
                .path("/api/admin/login")
                .json_body(serde_json::json!({
                    "email": "a@b.com",
                    "password": "xxxxxxxx",
                    "admin_key": "K"
                }));
            then.status(200).json_body(serde_json::json!({
                "access_token": "h.p.s",
                "user_id": 1,
                "role": "admin"
            }));
        });

        let runtime = create_runtime();
        let store = MemorySessionStore::default();
        let guard = SessionGuard::new(Rc::new(store.clone()));
        guard.initialize();
        let api = ApiClient::new_with_base_url(server.base_url(), guard.clone());

        login_request(
            LoginRequest {
                email: "a@b.com".into(),
                password: "x".repeat(8),
                admin_key: "K".into(),
            },
            &api,
            &guard,
        )
        .await
        .unwrap();

        assert_eq!(store.get(ACCESS_TOKEN_KEY).as_deref(), Some("h.p.s"));
        assert_eq!(store.get(ADMIN_KEY_KEY).as_deref(), Some("K"));
        assert_eq!(
            require_anonymous(&guard.current_session()),
            RouteDecision::Redirect("/dashboard")
        );
        runtime.dispose();
    }

    #[tokio::test]
    async fn login_request_rejects_non_admin_response() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/admin/login");
            then.status(200).json_body(serde_json::json!({
                "access_token": "h.p.s",
                "user_id": "2",
                "role": "doctor"
            }));
        });

        let runtime = create_runtime();
        let store = MemorySessionStore::default();
        let guard = SessionGuard::new(Rc::new(store.clone()));
        guard.initialize();
        let api = ApiClient::new_with_base_url(server.base_url(), guard.clone());

        let err = login_request(
            LoginRequest {
                email: "doc@b.com".into(),
                password: "password1".into(),
                admin_key: "K".into(),
            },
            &api,
            &guard,
        )
        .await
        .unwrap_err();

        assert_eq!(err.code, api::CODE_UNAUTHORIZED_ROLE);
        assert!(store.is_empty());
        assert!(!guard.current_session().is_authenticated);
        runtime.dispose();
    }

    #[test]
    fn guard_state_signal_tracks_login_and_logout() {
        with_runtime(|| {
            let guard = SessionGuard::new(Rc::new(MemorySessionStore::default()));
            let state = guard.state();
            guard.initialize();
            assert!(!state.get_untracked().is_authenticated);

            guard
                .login(AdminCredentials {
                    access_token: "h.p.s".into(),
                    user_id: "1".into(),
                    role: "admin".into(),
                    admin_key: "K".into(),
                })
                .unwrap();
            assert!(state.get_untracked().is_authenticated);

            guard.logout();
            assert!(!state.get_untracked().is_authenticated);
        });
    }
}
