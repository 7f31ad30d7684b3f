//! Product tile for the shop grid.
//!
//! Size selection happens on the card itself; add-to-cart publishes toasts for
//! every outcome (no size picked, not logged in, success, failure), so a tap
//! never fails silently.

use dioxus::prelude::*;

use api::Product;

use crate::icons::FaCartShopping;
use crate::{fault_message, use_gateway, use_notifier, use_session, Icon};

#[component]
pub fn ProductCard(product: Product) -> Element {
    let mut selected_size = use_signal(|| Option::<String>::None);
    let mut adding = use_signal(|| false);
    let session = use_session();
    let gateway = use_gateway();
    let notifier = use_notifier();

    let handle_add = {
        let gateway = gateway.clone();
        let notifier = notifier.clone();
        let product_id = product.id.clone();
        move |evt: MouseEvent| {
            evt.prevent_default();
            let gateway = gateway.clone();
            let notifier = notifier.clone();
            let product_id = product_id.clone();
            spawn(async move {
                let Some(size) = selected_size() else {
                    notifier.warning("Please select a size first");
                    return;
                };
                let Some(session) = session() else {
                    notifier.error("Please login to add items to cart");
                    return;
                };
                adding.set(true);
                match gateway
                    .add_to_cart(&product_id, &session.user.id, &size, 1)
                    .await
                {
                    Ok(_) => notifier.success("Added to cart successfully!"),
                    Err(error) => notifier.error(fault_message(&error, "Failed to add to cart")),
                }
                adding.set(false);
            });
        }
    };

    let image = match product.main_image() {
        Some(url) => rsx! {
            img {
                class: "product-card-image",
                src: "{url}",
                alt: "{product.name}",
                loading: "lazy",
            }
        },
        None => rsx! {
            div { class: "product-card-image product-card-image--placeholder" }
        },
    };

    let size_chips = product.prices.iter().map(|price| {
        let size = price.size.clone();
        let label = price.size.clone();
        let chip_class = if selected_size().as_deref() == Some(label.as_str()) {
            "size-chip size-chip--selected"
        } else {
            "size-chip"
        };
        rsx! {
            button {
                key: "{label}",
                class: "{chip_class}",
                onclick: move |evt| {
                    evt.prevent_default();
                    selected_size.set(Some(size.clone()));
                },
                "{label}"
            }
        }
    });

    let price_tag = match product.min_price() {
        Some(min) => rsx! {
            span { class: "product-card-price", "₹{min}" }
        },
        None => rsx! {},
    };

    rsx! {
        article { class: "product-card",
            a { class: "product-card-link", href: "/products/{product.id}",
                {image}
                div { class: "product-card-body",
                    h3 { class: "product-card-name", "{product.name}" }
                    div { class: "product-card-row",
                        div { class: "product-card-sizes", {size_chips} }
                        {price_tag}
                    }
                }
            }
            button {
                class: "product-card-add",
                disabled: adding() || selected_size().is_none(),
                onclick: handle_add,
                if adding() {
                    "Adding..."
                } else {
                    Icon { icon: FaCartShopping, width: 16, height: 16 }
                    "Add to Cart"
                }
            }
        }
    }
}
