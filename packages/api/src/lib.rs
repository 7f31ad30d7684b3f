//! # API crate — the gateway client for the Maille storefront
//!
//! All remote data access goes through this crate; UI components never build
//! outbound requests themselves. The backend of record is a single GraphQL
//! endpoint, and every operation here is a thin, typed binding over one POST
//! to it.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`Gateway`]: auth-header attachment, the request envelope, error normalisation, and one wrapper per backend operation |
//! | [`models`] | serde types mirroring the backend schema (`User`, `Product`, `Cart`, …) and their client-side projections |
//! | [`queries`] | The GraphQL operation texts |
//!
//! Authenticated operations read the bearer token from the
//! [`state::SessionStore`] and fail with [`ApiError::Unauthenticated`] before
//! any network attempt when no session is present.

mod client;
pub mod models;
pub mod queries;

pub use client::{ApiError, Gateway};
pub use models::{
    AuthResponse, Cart, CartItem, LoginInput, Price, Product, ProductImage, RegisterInput,
    UpdateUserDetailsInput, User, UserDetails,
};
