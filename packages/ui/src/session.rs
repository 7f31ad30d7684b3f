//! Session context and hooks for the UI.
//!
//! [`SessionProvider`] constructs the app's one [`SessionStore`] and
//! [`Gateway`] and hands them to every fragment via context. The store's
//! session-changed broadcast is bridged into a `Signal`, so fragments that
//! read [`use_session`] re-render on login, logout and profile edits without
//! sharing a render tree with the mutating component.

use std::rc::Rc;

use dioxus::prelude::*;
use state::{Session, SessionStore};

use crate::navigate_to;

/// Storage backend for the running platform: cookies in the browser, memory
/// elsewhere (tests, server-side rendering).
#[cfg(target_arch = "wasm32")]
pub type AppStorage = state::CookieStorage;
#[cfg(not(target_arch = "wasm32"))]
pub type AppStorage = state::MemoryStorage;

pub type AppSessionStore = SessionStore<AppStorage>;
pub type AppGateway = api::Gateway<AppStorage>;

/// Get the current session snapshot.
/// Returns a signal that updates when the user logs in or out.
pub fn use_session() -> Signal<Option<Session>> {
    use_context::<Signal<Option<Session>>>()
}

/// The app-wide session store handle.
pub fn use_session_store() -> AppSessionStore {
    use_context::<AppSessionStore>()
}

/// The app-wide gateway client handle.
pub fn use_gateway() -> AppGateway {
    use_context::<AppGateway>()
}

/// Clear the persisted session and return to the login page.
pub fn logout(store: &AppSessionStore) {
    store.clear();
    navigate_to("/login");
}

/// Provider component that owns the session store and gateway client.
/// Wrap the app with this component to enable authentication.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let store = use_hook(|| AppSessionStore::new(AppStorage::default()));

    let gateway = use_hook({
        let store = store.clone();
        move || AppGateway::new(store)
    });

    let session = use_signal({
        let store = store.clone();
        move || store.get()
    });

    // Keep the signal in lockstep with the store's broadcast for the life of
    // the provider.
    let _subscription = use_hook({
        let store = store.clone();
        move || {
            let reader = store.clone();
            Rc::new(store.subscribe(move || {
                // Signals are Copy; rebind so the Fn listener can write.
                let mut session = session;
                session.set(reader.get());
            }))
        }
    });

    use_context_provider(|| store);
    use_context_provider(|| gateway);
    use_context_provider(|| session);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let store = use_session_store();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| logout(&store),
            "{label}"
        }
    }
}
