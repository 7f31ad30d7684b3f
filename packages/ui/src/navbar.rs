//! Storefront header: brand, shop links and session-aware account controls.

use dioxus::prelude::*;

use crate::icons::FaCartShopping;
use crate::{use_session, Icon, LogoutButton};

#[component]
pub fn Navbar() -> Element {
    let session = use_session();

    let account = match session() {
        Some(session) => rsx! {
            a { class: "navbar-link", href: "/profile/{session.user.id}", "{session.user.name}" }
            LogoutButton { class: "navbar-logout" }
        },
        None => rsx! {
            a { class: "navbar-link", href: "/login", "Login" }
            a { class: "navbar-link navbar-link--accent", href: "/register", "Register" }
        },
    };

    rsx! {
        header { class: "navbar",
            a { class: "navbar-brand", href: "/", "Maille" }
            nav { class: "navbar-links",
                a { class: "navbar-link", href: "/products", "Shop" }
                a { class: "navbar-link navbar-cart", href: "/cart",
                    Icon { icon: FaCartShopping, width: 16, height: 16 }
                    "Cart"
                }
                {account}
            }
        }
    }
}
