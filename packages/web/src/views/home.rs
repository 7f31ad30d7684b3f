//! Landing page: hero, a short features strip and a featured-products row.

use dioxus::prelude::*;

use api::Product;
use ui::{use_gateway, ProductCard};

const FEATURED_COUNT: usize = 4;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        icon: "🎨",
        title: "Custom Orders",
        description: "Want something unique? We take custom orders!",
    },
    Feature {
        icon: "✨",
        title: "Quality Materials",
        description: "Only the finest yarns and materials used.",
    },
    Feature {
        icon: "💝",
        title: "Made with Care",
        description: "Each item is carefully crafted by hand.",
    },
];

/// Home page component.
#[component]
pub fn Home() -> Element {
    let gateway = use_gateway();

    let mut featured = use_signal(Vec::<Product>::new);
    let mut loading = use_signal(|| true);

    let _loader = use_resource(move || {
        let gateway = gateway.clone();
        async move {
            match gateway.products().await {
                Ok(mut products) => {
                    products.truncate(FEATURED_COUNT);
                    featured.set(products);
                }
                Err(err) => {
                    // The shop page retries; the landing page just renders
                    // without the featured row.
                    tracing::warn!("failed to load featured products: {err}");
                }
            }
            loading.set(false);
        }
    });

    let feature_cells = FEATURES.iter().map(|feature| {
        rsx! {
            div { key: "{feature.title}", class: "feature-card",
                span { class: "feature-icon", "{feature.icon}" }
                h3 { class: "feature-title", "{feature.title}" }
                p { class: "feature-description", "{feature.description}" }
            }
        }
    });

    let featured_row = if loading() {
        rsx! {
            p { class: "home-status", "Loading..." }
        }
    } else if featured().is_empty() {
        rsx! {}
    } else {
        let cards = featured().into_iter().map(|product| {
            rsx! {
                ProductCard { key: "{product.id}", product }
            }
        });
        rsx! {
            section { class: "home-featured",
                h2 { class: "home-section-title", "Featured" }
                div { class: "product-grid", {cards} }
            }
        }
    };

    rsx! {
        section { class: "hero",
            h1 { class: "hero-title", "Maille" }
            p { class: "hero-subtitle", "Handmade crochet, stitched with love." }
            a { class: "hero-cta", href: "/products", "Browse the shop" }
        }
        section { class: "features",
            {feature_cells}
        }
        {featured_row}
    }
}
