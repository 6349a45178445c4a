//! The signed-in user.
//!
//! The login response is stored verbatim under [`SESSION_KEY`]. It is read
//! once at start-up ([`restore`]), written only after a successful login
//! ([`persist`]) and removed by logout. Nothing else touches the store.

use serde_json::Value;

use crate::config::SESSION_KEY;

/// Durable key/value slot for the raw session payload.
pub trait SessionStore {
    fn load(&self) -> Option<String>;
    fn save(&self, raw: &str) -> Result<(), String>;
    fn clear(&self);
}

/// `window.localStorage`-backed store.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl SessionStore for BrowserStorage {
    fn load(&self) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(SESSION_KEY).ok().flatten())
    }

    fn save(&self, raw: &str) -> Result<(), String> {
        let storage = Self::storage().ok_or_else(|| "localStorage unavailable".to_string())?;
        storage
            .set_item(SESSION_KEY, raw)
            .map_err(|e| format!("Failed to persist session: {e:?}"))
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(SESSION_KEY);
        }
    }
}

/// The payload returned by `POST /users/login`.
///
/// Backends differ on whether user fields sit at the top level or under a
/// nested `user` object, so lookups try both.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    payload: Value,
}

impl Session {
    pub fn from_payload(payload: Value) -> Self {
        Self { payload }
    }

    pub fn payload(&self) -> &Value {
        &self.payload
    }

    pub fn user_id(&self) -> Option<&str> {
        self.field("id")
    }

    pub fn first_name(&self) -> Option<&str> {
        self.field("first_name")
    }

    pub fn access_token(&self) -> Option<&str> {
        self.field("access_token")
    }

    fn field(&self, key: &str) -> Option<&str> {
        self.payload
            .get(key)
            .or_else(|| self.payload.get("user").and_then(|u| u.get(key)))
            .and_then(Value::as_str)
            .filter(|v| !v.is_empty())
    }
}

/// Reads the stored session. A corrupt entry is dropped.
pub fn restore(store: &impl SessionStore) -> Option<Session> {
    let raw = store.load()?;
    match serde_json::from_str::<Value>(&raw) {
        Ok(payload) if payload.is_object() => Some(Session::from_payload(payload)),
        _ => {
            log::warn!("Discarding unreadable session entry");
            store.clear();
            None
        }
    }
}

/// Writes the full login payload and returns the session it represents.
pub fn persist(store: &impl SessionStore, payload: Value) -> Result<Session, String> {
    store.save(&payload.to_string())?;
    Ok(Session::from_payload(payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryStore;
    use serde_json::json;

    #[test]
    fn reads_top_level_fields() {
        let session = Session::from_payload(json!({"id": "u1", "first_name": "Ana"}));
        assert_eq!(session.user_id(), Some("u1"));
        assert_eq!(session.first_name(), Some("Ana"));
        assert_eq!(session.access_token(), None);
    }

    #[test]
    fn reads_nested_user_fields() {
        let session = Session::from_payload(json!({
            "access_token": "jwt",
            "user": {"id": "u2", "first_name": "Bo"}
        }));
        assert_eq!(session.user_id(), Some("u2"));
        assert_eq!(session.first_name(), Some("Bo"));
        assert_eq!(session.access_token(), Some("jwt"));
    }

    #[test]
    fn restore_without_entry_is_none() {
        assert!(restore(&MemoryStore::default()).is_none());
    }

    #[test]
    fn restore_discards_corrupt_entry() {
        let store = MemoryStore::with_entry("not json");
        assert!(restore(&store).is_none());
        assert!(store.load().is_none());
    }

    #[test]
    fn persist_then_restore() {
        let store = MemoryStore::default();
        let payload = json!({"id": "u1", "first_name": "Ana", "email": "ana@x.io"});
        let session = persist(&store, payload.clone()).unwrap();

        assert_eq!(session.payload(), &payload);
        assert_eq!(store.writes(), 1);
        assert_eq!(restore(&store), Some(session));
    }
}
