//! Login page view.

use dioxus::prelude::*;

use ui::{use_session, LoginForm};

/// Login page component.
#[component]
pub fn Login() -> Element {
    let session = use_session();

    // If already logged in, go home.
    if session().is_some() {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/");
            }
        }
    }

    rsx! {
        LoginForm {}
    }
}
