//! Cart page wrapping the shared cart view.

use dioxus::prelude::*;

use ui::CartView;

/// Cart page component.
#[component]
pub fn CartPage() -> Element {
    rsx! {
        CartView {}
    }
}
