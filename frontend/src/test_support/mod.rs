#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use std::rc::Rc;

    use crate::state::auth::{AdminSession, AuthState, Role, SessionGuard};
    use crate::utils::storage::{
        MemorySessionStore, ACCESS_TOKEN_KEY, ADMIN_KEY_KEY, ROLE_KEY, USER_ID_KEY,
    };
    use leptos::*;

    pub const ADMIN_TOKEN: &str = "h.p.s";
    pub const ADMIN_KEY: &str = "K";

    pub fn admin_session() -> AdminSession {
        AdminSession {
            token: ADMIN_TOKEN.into(),
            user_id: "1".into(),
            role: Role::Admin,
            admin_key: ADMIN_KEY.into(),
        }
    }

    pub fn admin_store() -> MemorySessionStore {
        MemorySessionStore::with_entries([
            (ACCESS_TOKEN_KEY, ADMIN_TOKEN),
            (USER_ID_KEY, "1"),
            (ROLE_KEY, "admin"),
            (ADMIN_KEY_KEY, ADMIN_KEY),
        ])
    }

    /// Guard restored from a stored admin session.
    pub fn signed_in_guard(store: &MemorySessionStore) -> SessionGuard {
        let guard = SessionGuard::new(Rc::new(store.clone()));
        guard.initialize();
        guard
    }

    pub fn provide_auth_state(state: AuthState) -> SessionGuard {
        let guard = SessionGuard::new(Rc::new(MemorySessionStore::default()));
        guard.overwrite_state_for_test(state);
        provide_context(guard.clone());
        guard
    }
}
