//! Shop page: the full product grid.

use dioxus::prelude::*;

use api::Product;
use ui::{fault_message, use_gateway, ProductCard};

/// Products listing page component.
#[component]
pub fn Products() -> Element {
    let gateway = use_gateway();

    let mut products = use_signal(Vec::<Product>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || {
        let gateway = gateway.clone();
        async move {
            loading.set(true);
            error.set(None);
            match gateway.products().await {
                Ok(list) => products.set(list),
                Err(err) => error.set(Some(fault_message(&err, "Failed to load products"))),
            }
            loading.set(false);
        }
    });

    let body = if loading() {
        rsx! {
            p { class: "page-status", "Loading products..." }
        }
    } else if let Some(message) = error() {
        rsx! {
            p { class: "page-status page-status--error", "{message}" }
        }
    } else if products().is_empty() {
        rsx! {
            p { class: "page-status", "No products yet — check back soon!" }
        }
    } else {
        let cards = products().into_iter().map(|product| {
            rsx! {
                ProductCard { key: "{product.id}", product }
            }
        });
        rsx! {
            div { class: "product-grid", {cards} }
        }
    };

    rsx! {
        section { class: "shop",
            h1 { class: "shop-title", "Shop" }
            {body}
        }
    }
}
