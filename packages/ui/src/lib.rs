//! This crate contains all shared UI for the Maille storefront.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod session;
pub use session::{
    logout, use_gateway, use_session, use_session_store, AppGateway, AppSessionStore, AppStorage,
    LogoutButton, SessionProvider,
};

mod toast;
pub use toast::{fault_message, use_notifier, Notifier, ToastHost};

mod navbar;
pub use navbar::Navbar;

mod product_card;
pub use product_card::ProductCard;

mod product_details;
pub use product_details::ProductDetails;

mod cart;
pub use cart::CartView;

mod login_form;
pub use login_form::LoginForm;

mod register_form;
pub use register_form::RegisterForm;

mod profile;
pub use profile::ProfileView;

pub const STOREFRONT_CSS: Asset = asset!("/assets/storefront.css");

/// Full-page navigation. A no-op outside the browser (server-side rendering
/// never navigates on behalf of the client).
pub fn navigate_to(path: &str) {
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(path);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("navigation to {path} skipped outside the browser");
    }
}
