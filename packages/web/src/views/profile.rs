//! Profile page wrapping the shared profile view.
//!
//! The server-side guard has already checked that the path id matches the
//! persisted session before this page is served.

use dioxus::prelude::*;

use ui::ProfileView;

/// Profile page component.
#[component]
pub fn Profile(user_id: String) -> Element {
    rsx! {
        ProfileView { user_id }
    }
}
