//! Cart page: line items with quantity controls, removal and the running
//! total. The cart reloads whenever the session changes, so logging in on
//! another tab or logging out immediately reflects here.

use dioxus::prelude::*;

use api::Cart;

use crate::icons::FaTrash;
use crate::{fault_message, use_gateway, use_notifier, use_session, Icon};

#[component]
pub fn CartView() -> Element {
    let session = use_session();
    let gateway = use_gateway();
    let notifier = use_notifier();

    let mut cart = use_signal(|| Option::<Cart>::None);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let loader_gateway = gateway.clone();
    let _loader = use_resource(move || {
        let gateway = loader_gateway.clone();
        async move {
            loading.set(true);
            error.set(None);
            let Some(session) = session() else {
                cart.set(None);
                error.set(Some("Please log in to view your cart".to_string()));
                loading.set(false);
                return;
            };
            match gateway.get_cart(&session.user.id).await {
                Ok(data) => cart.set(Some(data)),
                Err(err) => {
                    tracing::error!("failed to load cart: {err}");
                    error.set(Some(fault_message(&err, "Failed to load cart")));
                }
            }
            loading.set(false);
        }
    });

    let checkout_notifier = notifier.clone();

    let body = if loading() {
        rsx! {
            p { class: "cart-status", "Loading your cart..." }
        }
    } else if let Some(message) = error() {
        rsx! {
            p { class: "cart-status cart-status--error", "{message}" }
        }
    } else {
        match cart() {
            Some(data) if !data.is_empty() => {
                let rows = data.items.iter().map(|item| {
                    let line_price = item
                        .product
                        .price_for(&item.size)
                        .map(|price| price * item.quantity as f64);

                    let decrement = {
                        let gateway = gateway.clone();
                        let notifier = notifier.clone();
                        let item_id = item.id.clone();
                        let quantity = item.quantity;
                        move |_| {
                            let gateway = gateway.clone();
                            let notifier = notifier.clone();
                            let item_id = item_id.clone();
                            spawn(async move {
                                match gateway.update_cart_item(&item_id, quantity - 1).await {
                                    Ok(updated) => cart.set(Some(updated)),
                                    Err(err) => notifier
                                        .error(fault_message(&err, "Failed to update cart")),
                                }
                            });
                        }
                    };

                    let increment = {
                        let gateway = gateway.clone();
                        let notifier = notifier.clone();
                        let item_id = item.id.clone();
                        let quantity = item.quantity;
                        move |_| {
                            let gateway = gateway.clone();
                            let notifier = notifier.clone();
                            let item_id = item_id.clone();
                            spawn(async move {
                                match gateway.update_cart_item(&item_id, quantity + 1).await {
                                    Ok(updated) => cart.set(Some(updated)),
                                    Err(err) => notifier
                                        .error(fault_message(&err, "Failed to update cart")),
                                }
                            });
                        }
                    };

                    let remove = {
                        let gateway = gateway.clone();
                        let notifier = notifier.clone();
                        let item_id = item.id.clone();
                        move |_| {
                            let gateway = gateway.clone();
                            let notifier = notifier.clone();
                            let item_id = item_id.clone();
                            spawn(async move {
                                match gateway.remove_cart_item(&item_id).await {
                                    Ok(updated) => {
                                        cart.set(Some(updated));
                                        notifier.success("Item removed from cart");
                                    }
                                    Err(err) => notifier
                                        .error(fault_message(&err, "Failed to remove item")),
                                }
                            });
                        }
                    };

                    let image = match item.product.main_image() {
                        Some(url) => rsx! {
                            img {
                                class: "cart-item-image",
                                src: "{url}",
                                alt: "{item.product.name}",
                            }
                        },
                        None => rsx! {
                            div { class: "cart-item-image cart-item-image--placeholder" }
                        },
                    };

                    let line_price_tag = match line_price {
                        Some(price) => rsx! {
                            span { class: "cart-item-price", "₹{price}" }
                        },
                        None => rsx! {},
                    };

                    rsx! {
                        div { key: "{item.id}", class: "cart-item",
                            {image}
                            div { class: "cart-item-info",
                                h3 { class: "cart-item-name", "{item.product.name}" }
                                p { class: "cart-item-meta", "Size: {item.size}" }
                                {line_price_tag}
                            }
                            div { class: "cart-item-controls",
                                button {
                                    class: "quantity-button",
                                    disabled: item.quantity <= 1,
                                    onclick: decrement,
                                    "−"
                                }
                                span { class: "cart-item-quantity", "{item.quantity}" }
                                button {
                                    class: "quantity-button",
                                    onclick: increment,
                                    "+"
                                }
                                button {
                                    class: "cart-item-remove",
                                    aria_label: "Remove item",
                                    onclick: remove,
                                    Icon { icon: FaTrash, width: 14, height: 14 }
                                }
                            }
                        }
                    }
                });

                let total = data.total;
                rsx! {
                    div { class: "cart-items", {rows} }
                    div { class: "cart-summary",
                        div { class: "cart-total",
                            span { "Total:" }
                            span { class: "cart-total-value", "₹{total}" }
                        }
                        button {
                            class: "cart-checkout",
                            onclick: move |_| checkout_notifier.warning("Checkout is coming soon"),
                            "Proceed to Checkout"
                        }
                    }
                }
            }
            _ => rsx! {
                p { class: "cart-status", "Your cart is empty" }
            },
        }
    };

    rsx! {
        section { class: "cart",
            h1 { class: "cart-title", "Your Cart" }
            {body}
        }
    }
}
