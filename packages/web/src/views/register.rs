//! Registration page view.

use dioxus::prelude::*;

use ui::{use_session, RegisterForm};

/// Register page component.
#[component]
pub fn Register() -> Element {
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
        RegisterForm {}
    }
}
