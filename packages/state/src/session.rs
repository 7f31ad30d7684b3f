//! # Session store — single source of truth for "who is logged in"
//!
//! A [`Session`] is either fully present (non-empty token and user id) or
//! absent; there is no in-between. Corrupt or partially persisted state is
//! reported as absent rather than raised, so a bad cookie behaves exactly like
//! being logged out.
//!
//! Only the [`SessionUser`] projection — id, name, email, admin flag — is ever
//! persisted client-side. Richer user records stay on the wire; callers project
//! them down before handing them to [`SessionStore::set`].
//!
//! Every mutation broadcasts a session-changed signal to subscribed listeners
//! in registration order, after the new state is fully persisted. Listeners
//! carry no payload; they re-read the store for a consistent snapshot.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::storage::{SessionStorage, TOKEN_KEY, USER_KEY};

/// Minimal user projection persisted client-side.
///
/// Unknown fields in the persisted JSON are ignored when reading, and only
/// these four fields are ever written back.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
}

/// The current authenticated identity plus credential.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
}

/// Shallow update applied to the persisted user record.
///
/// The id identifies the session and is not patchable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub is_admin: Option<bool>,
}

type Listener = Rc<dyn Fn()>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

/// Cheap-clone handle to the session state.
///
/// Clones share the same listener registry; the storage backend decides
/// whether they also share persisted entries (both shipped backends do).
#[derive(Clone)]
pub struct SessionStore<S: SessionStorage> {
    storage: S,
    listeners: Rc<RefCell<Registry>>,
}

impl<S: SessionStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            listeners: Rc::new(RefCell::new(Registry::default())),
        }
    }

    /// Read the persisted session. Fails soft: any missing, partial or
    /// unparsable state comes back as `None`.
    pub fn get(&self) -> Option<Session> {
        let token = self.storage.get(TOKEN_KEY)?;
        let raw = self.storage.get(USER_KEY)?;
        let user: SessionUser = serde_json::from_str(&raw).ok()?;
        if token.is_empty() || user.id.is_empty() {
            return None;
        }
        Some(Session { token, user })
    }

    /// The bearer credential alone, for attaching auth headers.
    pub fn token(&self) -> Option<String> {
        self.get().map(|session| session.token)
    }

    pub fn is_authenticated(&self) -> bool {
        self.get().is_some()
    }

    /// Persist a new session and broadcast the change.
    pub fn set(&self, token: &str, user: &SessionUser) {
        self.storage.set(TOKEN_KEY, token);
        if let Ok(json) = serde_json::to_string(user) {
            self.storage.set(USER_KEY, &json);
        }
        self.broadcast();
    }

    /// Remove all persisted session state and broadcast the change.
    ///
    /// Returning the user to the unauthenticated entry point is the UI
    /// layer's follow-up; this store never touches navigation.
    pub fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
        self.broadcast();
    }

    /// Shallow-merge `patch` into the persisted user record.
    ///
    /// A no-op when no session is active.
    pub fn update(&self, patch: &SessionPatch) {
        let Some(session) = self.get() else {
            return;
        };
        let mut user = session.user;
        if let Some(name) = &patch.name {
            user.name = name.clone();
        }
        if let Some(email) = &patch.email {
            user.email = email.clone();
        }
        if let Some(is_admin) = patch.is_admin {
            user.is_admin = is_admin;
        }
        if let Ok(json) = serde_json::to_string(&user) {
            self.storage.set(USER_KEY, &json);
        }
        self.broadcast();
    }

    /// Register a listener invoked after every mutation. Dropping the returned
    /// subscription detaches it.
    pub fn subscribe(&self, listener: impl Fn() + 'static) -> SessionSubscription {
        let mut registry = self.listeners.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.entries.push((id, Rc::new(listener)));
        SessionSubscription {
            id,
            registry: Rc::clone(&self.listeners),
        }
    }

    fn broadcast(&self) {
        // Snapshot first so listeners may subscribe or unsubscribe mid-delivery.
        let snapshot: Vec<Listener> = self
            .listeners
            .borrow()
            .entries
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in snapshot {
            listener();
        }
    }
}

/// Handle keeping a session-changed listener registered.
pub struct SessionSubscription {
    id: u64,
    registry: Rc<RefCell<Registry>>,
}

impl SessionSubscription {
    /// Explicitly detach the listener. Dropping the handle does the same.
    pub fn unsubscribe(self) {}
}

impl Drop for SessionSubscription {
    fn drop(&mut self) {
        self.registry
            .borrow_mut()
            .entries
            .retain(|(id, _)| *id != self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn store() -> SessionStore<MemoryStorage> {
        SessionStore::new(MemoryStorage::new())
    }

    fn user() -> SessionUser {
        SessionUser {
            id: "u1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            is_admin: false,
        }
    }

    #[test]
    fn set_then_get_roundtrips() {
        let store = store();
        assert!(store.get().is_none());
        assert!(!store.is_authenticated());

        store.set("tok-123", &user());

        let session = store.get().unwrap();
        assert_eq!(session.token, "tok-123");
        assert_eq!(session.user, user());
        assert!(store.is_authenticated());
        assert_eq!(store.token().as_deref(), Some("tok-123"));
    }

    #[test]
    fn persisted_record_has_exactly_the_minimal_fields() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage.clone());
        store.set("tok", &user());

        let raw = storage.get(USER_KEY).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys.len(), 4);
        for key in ["id", "name", "email", "isAdmin"] {
            assert!(keys.contains(&key), "missing {key}");
        }
    }

    #[test]
    fn extra_persisted_fields_are_ignored_on_read() {
        let storage = MemoryStorage::new();
        storage.set(TOKEN_KEY, "tok");
        storage.set(
            USER_KEY,
            r#"{"id":"u1","name":"Ada","email":"ada@example.com","isAdmin":true,"extra":"drop-me"}"#,
        );

        let store = SessionStore::new(storage);
        let session = store.get().unwrap();
        assert_eq!(session.user.id, "u1");
        assert!(session.user.is_admin);
    }

    #[test]
    fn malformed_persisted_state_reads_as_absent() {
        for bad in [
            r#"{"id":"u1","name":"Ada""#, // truncated
            "not json at all",
            r#"{"name":"Ada"}"#, // missing required fields
            "",
        ] {
            let storage = MemoryStorage::new();
            storage.set(TOKEN_KEY, "tok");
            storage.set(USER_KEY, bad);
            let store = SessionStore::new(storage);
            assert!(store.get().is_none(), "accepted: {bad:?}");
        }
    }

    #[test]
    fn partial_sessions_read_as_absent() {
        // Token without a user record.
        let storage = MemoryStorage::new();
        storage.set(TOKEN_KEY, "tok");
        assert!(SessionStore::new(storage).get().is_none());

        // User record without a token.
        let storage = MemoryStorage::new();
        storage.set(
            USER_KEY,
            r#"{"id":"u1","name":"Ada","email":"a@x.com","isAdmin":false}"#,
        );
        assert!(SessionStore::new(storage).get().is_none());

        // Empty token and empty id both invalidate the session.
        let storage = MemoryStorage::new();
        storage.set(TOKEN_KEY, "");
        storage.set(
            USER_KEY,
            r#"{"id":"u1","name":"Ada","email":"a@x.com","isAdmin":false}"#,
        );
        assert!(SessionStore::new(storage).get().is_none());

        let storage = MemoryStorage::new();
        storage.set(TOKEN_KEY, "tok");
        storage.set(
            USER_KEY,
            r#"{"id":"","name":"Ada","email":"a@x.com","isAdmin":false}"#,
        );
        assert!(SessionStore::new(storage).get().is_none());
    }

    #[test]
    fn clear_removes_both_entries() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage.clone());
        store.set("tok", &user());
        store.clear();

        assert!(store.get().is_none());
        assert!(storage.get(TOKEN_KEY).is_none());
        assert!(storage.get(USER_KEY).is_none());
    }

    #[test]
    fn update_merges_into_persisted_record() {
        let store = store();
        store.set("tok", &user());

        store.update(&SessionPatch {
            name: Some("Ada L.".to_string()),
            ..Default::default()
        });

        let session = store.get().unwrap();
        assert_eq!(session.user.name, "Ada L.");
        assert_eq!(session.user.email, "ada@example.com");
        assert_eq!(session.token, "tok");
    }

    #[test]
    fn update_without_session_is_a_noop() {
        let store = store();
        store.update(&SessionPatch {
            name: Some("ghost".to_string()),
            ..Default::default()
        });
        assert!(store.get().is_none());
    }

    #[test]
    fn mutations_broadcast_once_each() {
        use std::cell::Cell;

        let store = store();
        let count = Rc::new(Cell::new(0u32));
        let seen = Rc::clone(&count);
        let _sub = store.subscribe(move || seen.set(seen.get() + 1));

        store.set("tok", &user());
        assert_eq!(count.get(), 1);

        store.update(&SessionPatch {
            email: Some("new@example.com".to_string()),
            ..Default::default()
        });
        assert_eq!(count.get(), 2);

        store.clear();
        assert_eq!(count.get(), 3);

        // An update with no active session must not broadcast.
        store.update(&SessionPatch::default());
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn listeners_run_in_registration_order() {
        let store = store();
        let order = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&order);
        let _a = store.subscribe(move || first.borrow_mut().push("a"));
        let second = Rc::clone(&order);
        let _b = store.subscribe(move || second.borrow_mut().push("b"));

        store.set("tok", &user());
        assert_eq!(*order.borrow(), vec!["a", "b"]);
    }

    #[test]
    fn dropped_subscription_detaches_listener() {
        use std::cell::Cell;

        let store = store();
        let count = Rc::new(Cell::new(0u32));
        let seen = Rc::clone(&count);
        let sub = store.subscribe(move || seen.set(seen.get() + 1));

        store.set("tok", &user());
        assert_eq!(count.get(), 1);

        sub.unsubscribe();
        store.clear();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn clones_share_listeners_and_state() {
        use std::cell::Cell;

        let store = store();
        let other = store.clone();
        let count = Rc::new(Cell::new(0u32));
        let seen = Rc::clone(&count);
        let _sub = other.subscribe(move || seen.set(seen.get() + 1));

        store.set("tok", &user());
        assert_eq!(count.get(), 1);
        assert!(other.is_authenticated());
    }
}
