//! # Key-value persistence behind the session store
//!
//! [`SessionStorage`] is the small synchronous interface the
//! [`SessionStore`](crate::SessionStore) persists through. Implementations live
//! here:
//!
//! | Backend | Platform | Medium |
//! |---------|----------|--------|
//! | [`MemoryStorage`] | native (tests, server-side rendering) | `HashMap` behind a mutex |
//! | [`CookieStorage`] | wasm32 | `document.cookie` |
//!
//! Two well-known entries make up a persisted session: [`TOKEN_KEY`] holds the
//! opaque bearer token and [`USER_KEY`] a JSON-serialised minimal user record.
//! The same cookie names are read server-side by the route guard, so they are
//! part of the application's external interface and must not change lightly.
//!
//! Cookie writes carry a 7-day `Max-Age`, `Path=/`, `Secure` and
//! `SameSite=Strict`. Reads fail soft: a missing document, an unreadable cookie
//! jar or a value that does not percent-decode all come back as `None`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Cookie holding the opaque bearer token.
pub const TOKEN_KEY: &str = "auth_token";
/// Cookie holding the JSON-serialised minimal user record.
pub const USER_KEY: &str = "user_data";

/// Session persistence lifetime: 7 days.
pub const SESSION_TTL_SECS: u64 = 7 * 24 * 60 * 60;

/// Synchronous key-value persistence for session state.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory SessionStorage for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}

/// Cookie-backed SessionStorage for the web platform.
///
/// Values are percent-encoded on write and decoded on read so JSON payloads
/// survive the cookie value grammar.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Debug, Default)]
pub struct CookieStorage;

#[cfg(target_arch = "wasm32")]
impl CookieStorage {
    pub fn new() -> Self {
        Self
    }

    fn document() -> Option<web_sys::HtmlDocument> {
        use wasm_bindgen::JsCast;
        web_sys::window()?.document()?.dyn_into().ok()
    }

    fn write(directive: &str) {
        if let Some(doc) = Self::document() {
            let _ = doc.set_cookie(directive);
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl SessionStorage for CookieStorage {
    fn get(&self, key: &str) -> Option<String> {
        let jar = Self::document()?.cookie().ok()?;
        for pair in jar.split(';') {
            if let Some((name, value)) = pair.trim().split_once('=') {
                if name == key {
                    return js_sys::decode_uri_component(value).ok().map(String::from);
                }
            }
        }
        None
    }

    fn set(&self, key: &str, value: &str) {
        let encoded = String::from(js_sys::encode_uri_component(value));
        Self::write(&format!(
            "{key}={encoded}; Max-Age={SESSION_TTL_SECS}; Path=/; Secure; SameSite=Strict"
        ));
    }

    fn remove(&self, key: &str) {
        Self::write(&format!(
            "{key}=; Max-Age=0; Path=/; Secure; SameSite=Strict"
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_roundtrip() {
        let storage = MemoryStorage::new();
        assert!(storage.get("missing").is_none());

        storage.set("k", "v");
        assert_eq!(storage.get("k").as_deref(), Some("v"));

        storage.set("k", "v2");
        assert_eq!(storage.get("k").as_deref(), Some("v2"));

        storage.remove("k");
        assert!(storage.get("k").is_none());
    }

    #[test]
    fn memory_storage_clones_share_entries() {
        let storage = MemoryStorage::new();
        let other = storage.clone();

        storage.set("k", "v");
        assert_eq!(other.get("k").as_deref(), Some("v"));
    }
}
