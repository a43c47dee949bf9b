use std::{cell::RefCell, collections::HashMap, rc::Rc};

use thiserror::Error;

pub const ACCESS_TOKEN_KEY: &str = "admin_access_token";
pub const USER_ID_KEY: &str = "admin_user_id";
pub const ROLE_KEY: &str = "admin_role";
pub const ADMIN_KEY_KEY: &str = "admin_api_key";

pub const SESSION_KEYS: [&str; 4] = [ACCESS_TOKEN_KEY, USER_ID_KEY, ROLE_KEY, ADMIN_KEY_KEY];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("No localStorage")]
    Unavailable,
    #[error("Failed to write '{key}' to storage")]
    WriteFailed { key: &'static str },
}

/// Raw credential fields as found in durable storage. Any of them may be
/// missing; interpreting them is the session guard's job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredSession {
    pub token: Option<String>,
    pub user_id: Option<String>,
    pub role: Option<String>,
    pub admin_key: Option<String>,
}

impl StoredSession {
    pub fn is_empty(&self) -> bool {
        self.token.is_none()
            && self.user_id.is_none()
            && self.role.is_none()
            && self.admin_key.is_none()
    }

    fn field(&self, key: &str) -> Option<&str> {
        match key {
            ACCESS_TOKEN_KEY => self.token.as_deref(),
            USER_ID_KEY => self.user_id.as_deref(),
            ROLE_KEY => self.role.as_deref(),
            ADMIN_KEY_KEY => self.admin_key.as_deref(),
            _ => None,
        }
    }

    fn from_lookup(mut lookup: impl FnMut(&str) -> Option<String>) -> Self {
        Self {
            token: lookup(ACCESS_TOKEN_KEY),
            user_id: lookup(USER_ID_KEY),
            role: lookup(ROLE_KEY),
            admin_key: lookup(ADMIN_KEY_KEY),
        }
    }
}

/// Durable key-value persistence for the admin session.
pub trait SessionStore {
    fn load(&self) -> StoredSession;
    fn save(&self, session: &StoredSession) -> Result<(), StorageError>;
    fn clear(&self);
}

/// `window.localStorage` backed store used by the browser build.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSessionStore;

impl SessionStore for BrowserSessionStore {
    fn load(&self) -> StoredSession {
        let Ok(storage) = local_storage() else {
            return StoredSession::default();
        };
        StoredSession::from_lookup(|key| storage.get_item(key).ok().flatten())
    }

    fn save(&self, session: &StoredSession) -> Result<(), StorageError> {
        let storage = local_storage().map_err(|_| StorageError::Unavailable)?;
        for key in SESSION_KEYS {
            match session.field(key) {
                Some(value) => storage
                    .set_item(key, value)
                    .map_err(|_| StorageError::WriteFailed { key })?,
                None => {
                    let _ = storage.remove_item(key);
                }
            }
        }
        Ok(())
    }

    fn clear(&self) {
        if let Ok(storage) = local_storage() {
            for key in SESSION_KEYS {
                let _ = storage.remove_item(key);
            }
        }
    }
}

/// In-memory store for the host build and tests. Clones share one map.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemorySessionStore {
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::default();
        store.entries.borrow_mut().extend(
            entries
                .into_iter()
                .map(|(key, value)| (key.to_string(), value.to_string())),
        );
        store
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> StoredSession {
        let entries = self.entries.borrow();
        StoredSession::from_lookup(|key| entries.get(key).cloned())
    }

    fn save(&self, session: &StoredSession) -> Result<(), StorageError> {
        let mut entries = self.entries.borrow_mut();
        for key in SESSION_KEYS {
            match session.field(key) {
                Some(value) => {
                    entries.insert(key.to_string(), value.to_string());
                }
                None => {
                    entries.remove(key);
                }
            }
        }
        Ok(())
    }

    fn clear(&self) {
        let mut entries = self.entries.borrow_mut();
        for key in SESSION_KEYS {
            entries.remove(key);
        }
    }
}

/// Store used when the app is mounted without an explicit one.
pub fn default_session_store() -> Rc<dyn SessionStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(BrowserSessionStore)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(MemorySessionStore::default())
    }
}

pub fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

pub fn local_storage() -> Result<web_sys::Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_session() -> StoredSession {
        StoredSession {
            token: Some("a.b.c".into()),
            user_id: Some("7".into()),
            role: Some("admin".into()),
            admin_key: Some("K".into()),
        }
    }

    #[test]
    fn memory_store_load_returns_absent_fields_when_never_set() {
        let store = MemorySessionStore::default();
        let loaded = store.load();
        assert!(loaded.is_empty());
        assert_eq!(loaded, StoredSession::default());
    }

    #[test]
    fn memory_store_save_writes_all_four_keys() {
        let store = MemorySessionStore::default();
        store.save(&full_session()).unwrap();

        assert_eq!(store.get(ACCESS_TOKEN_KEY).as_deref(), Some("a.b.c"));
        assert_eq!(store.get(USER_ID_KEY).as_deref(), Some("7"));
        assert_eq!(store.get(ROLE_KEY).as_deref(), Some("admin"));
        assert_eq!(store.get(ADMIN_KEY_KEY).as_deref(), Some("K"));
        assert_eq!(store.load(), full_session());
    }

    #[test]
    fn memory_store_save_overwrites_previous_values() {
        let store = MemorySessionStore::with_entries([(ACCESS_TOKEN_KEY, "old.old.old")]);
        let mut session = full_session();
        session.admin_key = None;
        store.save(&session).unwrap();

        assert_eq!(store.get(ACCESS_TOKEN_KEY).as_deref(), Some("a.b.c"));
        assert!(store.get(ADMIN_KEY_KEY).is_none());
    }

    #[test]
    fn memory_store_clear_removes_only_session_keys() {
        let store = MemorySessionStore::with_entries([
            (ACCESS_TOKEN_KEY, "a.b.c"),
            (ROLE_KEY, "admin"),
            ("theme", "dark"),
        ]);
        store.clear();

        assert!(store.load().is_empty());
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn memory_store_clones_share_entries() {
        let store = MemorySessionStore::default();
        let handle = store.clone();
        store.save(&full_session()).unwrap();
        assert_eq!(handle.load(), full_session());
        handle.clear();
        assert!(store.is_empty());
    }
}
