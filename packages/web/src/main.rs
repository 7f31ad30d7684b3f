use dioxus::prelude::*;

use ui::{Navbar, SessionProvider, ToastHost};
use views::{CartPage, Home, Login, ProductDetail, Products, Profile, Register};

mod guard;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/products")]
        Products {},
        #[route("/products/:product_id")]
        ProductDetail { product_id: String },
        #[route("/cart")]
        CartPage {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/profile/:user_id")]
        Profile { user_id: String },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(launch_server());
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() {
    use dioxus::server::{DioxusRouterExt, ServeConfig};

    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    // Route guard first, so protected pages redirect before any rendering.
    let router = axum::Router::new()
        .serve_dioxus_application(ServeConfig::new(), App)
        .layer(axum::middleware::from_fn(guard::require_session));

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    tracing::info!("Storefront listening on {}", addr);

    axum::serve(listener, router.into_make_service())
        .await
        .unwrap();
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::STOREFRONT_CSS }

        SessionProvider {
            ToastHost {
                Router::<Route> {}
            }
        }
    }
}

/// Shared page chrome: navbar on top, routed content below.
#[component]
fn Shell() -> Element {
    rsx! {
        Navbar {}
        main { class: "page",
            Outlet::<Route> {}
        }
    }
}
