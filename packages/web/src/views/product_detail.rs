//! Product detail page: loads one product by id and hands it to the shared
//! details component.

use dioxus::prelude::*;

use api::Product;
use ui::{fault_message, use_gateway, ProductDetails};

/// Product detail page component.
#[component]
pub fn ProductDetail(product_id: String) -> Element {
    // Track the id in a signal so the loader re-runs on route param change.
    let mut path_product_id = use_signal(|| product_id.clone());
    if *path_product_id.peek() != product_id {
        path_product_id.set(product_id.clone());
    }

    let gateway = use_gateway();

    let mut product = use_signal(|| Option::<Product>::None);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || {
        let gateway = gateway.clone();
        let id = path_product_id();
        async move {
            loading.set(true);
            error.set(None);
            match gateway.product(&id).await {
                Ok(fetched) => product.set(Some(fetched)),
                Err(err) => error.set(Some(fault_message(&err, "Failed to load product"))),
            }
            loading.set(false);
        }
    });

    if loading() {
        return rsx! {
            p { class: "page-status", "Loading product..." }
        };
    }

    if let Some(message) = error() {
        return rsx! {
            p { class: "page-status page-status--error", "{message}" }
        };
    }

    match product() {
        Some(product) => rsx! {
            ProductDetails { product }
        },
        None => rsx! {
            p { class: "page-status", "Product not found" }
        },
    }
}
