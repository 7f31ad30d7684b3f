//! Full product page: gallery, description and size selection with a price
//! display that follows the chosen size.

use dioxus::prelude::*;

use api::Product;

use crate::{fault_message, use_gateway, use_notifier, use_session};

#[component]
pub fn ProductDetails(product: Product) -> Element {
    let mut selected_size = use_signal(|| Option::<String>::None);
    let mut adding = use_signal(|| false);
    let session = use_session();
    let gateway = use_gateway();
    let notifier = use_notifier();

    // Selected variant's price, falling back to the cheapest one.
    let display_price = selected_size()
        .and_then(|size| product.price_for(&size))
        .or_else(|| product.min_price());

    let handle_add = {
        let gateway = gateway.clone();
        let notifier = notifier.clone();
        let product_id = product.id.clone();
        let product_name = product.name.clone();
        move |_| {
            let gateway = gateway.clone();
            let notifier = notifier.clone();
            let product_id = product_id.clone();
            let product_name = product_name.clone();
            spawn(async move {
                let Some(session) = session() else {
                    notifier.error("Please login to add items to cart");
                    return;
                };
                let Some(size) = selected_size() else {
                    notifier.error("Please select a size first");
                    return;
                };
                adding.set(true);
                match gateway
                    .add_to_cart(&product_id, &session.user.id, &size, 1)
                    .await
                {
                    Ok(_) => notifier.success(format!("{product_name} added to cart!")),
                    Err(error) => notifier.error(fault_message(&error, "Failed to add to cart")),
                }
                adding.set(false);
            });
        }
    };

    let main_image = match product.main_image() {
        Some(url) => rsx! {
            img {
                class: "product-hero-image",
                src: "{url}",
                alt: "{product.name}",
                loading: "lazy",
            }
        },
        None => rsx! {
            div { class: "product-hero-image product-hero-image--placeholder" }
        },
    };

    let thumbnails = if product.images.len() > 1 {
        let cells = product.images.iter().map(|image| {
            rsx! {
                div { key: "{image.id}", class: "product-thumb",
                    img { src: "{image.url}", alt: "", loading: "lazy" }
                }
            }
        });
        rsx! {
            div { class: "product-thumbs", {cells} }
        }
    } else {
        rsx! {}
    };

    let size_buttons = product.prices.iter().map(|price| {
        let size = price.size.clone();
        let label = price.size.clone();
        let button_class = if selected_size().as_deref() == Some(label.as_str()) {
            "size-button size-button--selected"
        } else {
            "size-button"
        };
        rsx! {
            button {
                key: "{label}",
                class: "{button_class}",
                onclick: move |_| selected_size.set(Some(size.clone())),
                "{label}"
            }
        }
    });

    let price_block = match display_price {
        Some(price) => rsx! {
            div { class: "product-price", "₹{price}" }
        },
        None => rsx! {},
    };

    let description = product
        .description
        .clone()
        .unwrap_or_else(|| "No description available.".to_string());

    rsx! {
        div { class: "product-details",
            div { class: "product-gallery",
                {main_image}
                {thumbnails}
            }
            div { class: "product-info",
                h1 { class: "product-title", "{product.name}" }
                p { class: "product-description", "{description}" }
                {price_block}
                div { class: "product-sizes-block",
                    h3 { "Available Sizes" }
                    div { class: "product-sizes", {size_buttons} }
                }
                button {
                    class: "product-add",
                    disabled: adding() || selected_size().is_none(),
                    onclick: handle_add,
                    if adding() {
                        "Adding to Cart..."
                    } else {
                        "Add to Cart"
                    }
                }
            }
        }
    }
}
