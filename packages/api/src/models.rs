//! # Remote data models
//!
//! serde types for the payloads crossing the gateway, mirroring the backend
//! schema. Field names follow the wire (camelCase where the backend uses it);
//! unknown fields are tolerated everywhere so schema additions on the backend
//! do not break the client.
//!
//! [`User::to_session_user`] is the data-minimisation boundary: it projects a
//! full user record down to the four fields the session store is allowed to
//! persist client-side.

use serde::{Deserialize, Serialize};
use state::SessionUser;

/// Full user record as returned by the gateway.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub user_details: Option<UserDetails>,
}

impl User {
    /// Minimal projection for client-side persistence. Everything else on the
    /// record stays off the cookie jar.
    pub fn to_session_user(&self) -> SessionUser {
        SessionUser {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            is_admin: self.is_admin,
        }
    }
}

/// Shipping and contact details attached to a user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetails {
    #[serde(default)]
    pub id: Option<String>,
    pub address: String,
    pub city: String,
    pub pincode: i64,
    pub country: String,
    pub phone: String,
}

/// Login/registration result: credential plus the authenticated user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub user: User,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateUserDetailsInput {
    pub address: String,
    pub city: String,
    pub pincode: i64,
    pub country: String,
    pub phone: String,
}

/// A size variant and its price.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub size: String,
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductImage {
    pub id: String,
    pub url: String,
}

/// Catalogue product. The cart embeds a reduced copy of this shape, so most
/// fields default when absent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub stock: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub prices: Vec<Price>,
    #[serde(default)]
    pub images: Vec<ProductImage>,
}

impl Product {
    /// Cheapest size variant, if any are listed.
    pub fn min_price(&self) -> Option<f64> {
        self.prices.iter().map(|price| price.value).reduce(f64::min)
    }

    /// Price of a specific size variant.
    pub fn price_for(&self, size: &str) -> Option<f64> {
        self.prices
            .iter()
            .find(|price| price.size == size)
            .map(|price| price.value)
    }

    /// First listed image, used as the main display image.
    pub fn main_image(&self) -> Option<&str> {
        self.images.first().map(|image| image.url.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub quantity: i64,
    pub size: String,
    pub product: Product,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub items: Vec<CartItem>,
    #[serde(default)]
    pub total: f64,
}

impl Cart {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_parses_from_gateway_json() {
        let user: User = serde_json::from_str(
            r#"{
                "id": "u1",
                "name": "Ada",
                "email": "ada@example.com",
                "isAdmin": true,
                "createdAt": "2024-01-01T00:00:00Z",
                "updatedAt": "2024-01-02T00:00:00Z",
                "userDetails": {
                    "id": "d1",
                    "address": "1 Yarn Lane",
                    "city": "Pune",
                    "pincode": 411001,
                    "country": "India",
                    "phone": "555-0100"
                }
            }"#,
        )
        .unwrap();

        assert!(user.is_admin);
        assert_eq!(user.user_details.unwrap().city, "Pune");
    }

    #[test]
    fn session_projection_keeps_exactly_four_fields() {
        let user: User = serde_json::from_str(
            r#"{
                "id": "u1",
                "name": "A",
                "email": "a@x.com",
                "isAdmin": false,
                "createdAt": "2024-01-01T00:00:00Z",
                "updatedAt": "2024-01-02T00:00:00Z",
                "extra": "drop-me"
            }"#,
        )
        .unwrap();

        let projected = serde_json::to_value(user.to_session_user()).unwrap();
        let keys: Vec<&str> = projected
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys.len(), 4);
        assert!(keys.contains(&"isAdmin"));
        assert!(!keys.contains(&"createdAt"));
        assert!(!keys.contains(&"extra"));
    }

    #[test]
    fn product_price_helpers() {
        let product: Product = serde_json::from_str(
            r#"{
                "id": "p1",
                "name": "Granny Square Tote",
                "category": "bags",
                "stock": 4,
                "description": "Hand crocheted.",
                "prices": [
                    {"size": "small", "value": 450.0},
                    {"size": "large", "value": 700.0}
                ],
                "images": [{"id": "i1", "url": "https://cdn.example.com/tote.webp"}]
            }"#,
        )
        .unwrap();

        assert_eq!(product.min_price(), Some(450.0));
        assert_eq!(product.price_for("large"), Some(700.0));
        assert_eq!(product.price_for("xl"), None);
        assert_eq!(product.main_image(), Some("https://cdn.example.com/tote.webp"));
    }

    #[test]
    fn cart_parses_with_reduced_product_shape() {
        let cart: Cart = serde_json::from_str(
            r#"{
                "id": "c1",
                "userId": "u1",
                "items": [{
                    "id": "ci1",
                    "quantity": 2,
                    "size": "small",
                    "product": {
                        "id": "p1",
                        "name": "Granny Square Tote",
                        "prices": [{"size": "small", "value": 450.0}]
                    }
                }],
                "total": 900.0
            }"#,
        )
        .unwrap();

        assert!(!cart.is_empty());
        assert_eq!(cart.items[0].product.images.len(), 0);
        assert_eq!(cart.total, 900.0);
    }

    #[test]
    fn register_input_omits_absent_admin_flag() {
        let input = RegisterInput {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "hunter22".to_string(),
            is_admin: None,
        };
        let value = serde_json::to_value(&input).unwrap();
        assert!(value.get("isAdmin").is_none());
    }
}
