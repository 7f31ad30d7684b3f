//! # Gateway — the single pathway to the remote GraphQL endpoint
//!
//! [`Gateway::request`] builds one POST, attaches the bearer token for
//! authenticated operations (failing fast with [`ApiError::Unauthenticated`]
//! when no session exists — no network attempt is made), and normalises the
//! response envelope: a non-empty `errors` list becomes
//! [`ApiError::Remote`] carrying the first message; otherwise the `data`
//! value is handed back for the caller to destructure.
//!
//! Only the first remote error message survives; the rest are discarded. That
//! is deliberate and matches what the display surface can show.
//!
//! No retries, no timeouts, no logging of remote payloads.

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;

use state::{SessionStorage, SessionStore};

use crate::models::{
    AuthResponse, Cart, LoginInput, Product, RegisterInput, UpdateUserDetailsInput, User,
    UserDetails,
};
use crate::queries;

const DEFAULT_ENDPOINT: &str = "https://maille-backend.up.railway.app/graphql";

/// Errors surfaced by the gateway client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// An authenticated operation was attempted with no valid session.
    #[error("authentication required")]
    Unauthenticated,
    /// The gateway reported a fault; carries the first error message verbatim.
    #[error("{0}")]
    Remote(String),
    /// The network call itself did not complete.
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The gateway response could not be decoded.
    #[error("malformed gateway response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Vec<RemoteError>>,
}

#[derive(Debug, Deserialize)]
struct RemoteError {
    #[serde(default)]
    message: String,
}

fn unwrap_envelope(envelope: Envelope) -> Result<Value, ApiError> {
    if let Some(first) = envelope.errors.into_iter().flatten().next() {
        let message = if first.message.is_empty() {
            "GraphQL request failed".to_string()
        } else {
            first.message
        };
        return Err(ApiError::Remote(message));
    }
    Ok(envelope.data.unwrap_or(Value::Null))
}

/// Client for the remote storefront backend.
///
/// Cheap to clone; clones share the HTTP connection pool and the session
/// store handle.
#[derive(Clone)]
pub struct Gateway<S: SessionStorage> {
    http: reqwest::Client,
    endpoint: String,
    session: SessionStore<S>,
}

impl<S: SessionStorage> Gateway<S> {
    /// Client against the configured endpoint (`MAILLE_GRAPHQL_URL` at build
    /// time, with the production URL as default).
    pub fn new(session: SessionStore<S>) -> Self {
        Self::with_endpoint(
            session,
            option_env!("MAILLE_GRAPHQL_URL").unwrap_or(DEFAULT_ENDPOINT),
        )
    }

    pub fn with_endpoint(session: SessionStore<S>, endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            session,
        }
    }

    /// The session store this gateway reads credentials from.
    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    /// Submit one operation to the gateway and unwrap the response envelope.
    pub async fn request(
        &self,
        query: &str,
        variables: Value,
        require_auth: bool,
    ) -> Result<Value, ApiError> {
        let mut builder = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .header("apollo-require-preflight", "true")
            .json(&json!({ "query": query, "variables": variables }));

        if require_auth {
            let token = self.session.token().ok_or(ApiError::Unauthenticated)?;
            builder = builder.bearer_auth(token);
        }

        #[cfg(target_arch = "wasm32")]
        {
            builder = builder.fetch_credentials_include();
        }

        let envelope: Envelope = builder.send().await?.json().await?;
        unwrap_envelope(envelope)
    }

    /// Run an operation and destructure the single field the caller asked for.
    async fn field<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Value,
        require_auth: bool,
        field: &str,
    ) -> Result<T, ApiError> {
        let mut data = self.request(query, variables, require_auth).await?;
        let value = data.get_mut(field).map(Value::take).unwrap_or(Value::Null);
        Ok(serde_json::from_value(value)?)
    }

    // Auth

    pub async fn login(&self, input: &LoginInput) -> Result<AuthResponse, ApiError> {
        self.field(queries::LOGIN, json!({ "input": input }), false, "login")
            .await
    }

    pub async fn register(&self, input: &RegisterInput) -> Result<AuthResponse, ApiError> {
        self.field(
            queries::REGISTER,
            json!({ "input": input }),
            false,
            "register",
        )
        .await
    }

    // Products

    pub async fn products(&self) -> Result<Vec<Product>, ApiError> {
        self.field(queries::GET_PRODUCTS, json!({}), false, "products")
            .await
    }

    pub async fn product(&self, id: &str) -> Result<Product, ApiError> {
        self.field(queries::GET_PRODUCT, json!({ "id": id }), false, "product")
            .await
    }

    // Users

    pub async fn user_by_email(&self, email: &str) -> Result<User, ApiError> {
        self.field(
            queries::USER_BY_EMAIL,
            json!({ "email": email }),
            true,
            "userByEmail",
        )
        .await
    }

    pub async fn user_by_id(&self, user_id: &str) -> Result<User, ApiError> {
        self.field(
            queries::USER_BY_ID,
            json!({ "userId": user_id }),
            true,
            "userById",
        )
        .await
    }

    pub async fn update_user_details(
        &self,
        input: &UpdateUserDetailsInput,
    ) -> Result<UserDetails, ApiError> {
        self.field(
            queries::UPDATE_USER_DETAILS,
            json!({ "input": input }),
            true,
            "updateUserDetails",
        )
        .await
    }

    // Cart

    pub async fn get_cart(&self, user_id: &str) -> Result<Cart, ApiError> {
        self.field(
            queries::GET_CART,
            json!({ "userId": user_id }),
            true,
            "getCart",
        )
        .await
    }

    pub async fn add_to_cart(
        &self,
        product_id: &str,
        user_id: &str,
        size: &str,
        quantity: i64,
    ) -> Result<Cart, ApiError> {
        self.field(
            queries::ADD_TO_CART,
            json!({
                "input": {
                    "userId": user_id,
                    "productId": product_id,
                    "size": size,
                    "quantity": quantity,
                }
            }),
            true,
            "addToCart",
        )
        .await
    }

    /// Change the quantity of one cart line. The owning user comes from the
    /// current session.
    pub async fn update_cart_item(&self, item_id: &str, quantity: i64) -> Result<Cart, ApiError> {
        let session = self.session.get().ok_or(ApiError::Unauthenticated)?;
        self.field(
            queries::UPDATE_CART_ITEM,
            json!({
                "userId": session.user.id,
                "input": {
                    "cartItemId": item_id,
                    "quantity": quantity,
                }
            }),
            true,
            "updateCartItem",
        )
        .await
    }

    /// Remove one cart line. The owning user comes from the current session.
    pub async fn remove_cart_item(&self, item_id: &str) -> Result<Cart, ApiError> {
        let session = self.session.get().ok_or(ApiError::Unauthenticated)?;
        self.field(
            queries::REMOVE_CART_ITEM,
            json!({
                "userId": session.user.id,
                "cartItemId": item_id,
            }),
            true,
            "removeCartItem",
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use state::{MemoryStorage, SessionUser};

    fn envelope(raw: &str) -> Envelope {
        serde_json::from_str(raw).unwrap()
    }

    fn gateway() -> Gateway<MemoryStorage> {
        // An endpoint nothing listens on; tests below never complete a call.
        Gateway::with_endpoint(
            SessionStore::new(MemoryStorage::new()),
            "http://127.0.0.1:0/graphql",
        )
    }

    #[test]
    fn envelope_surfaces_first_error_only() {
        let result = unwrap_envelope(envelope(
            r#"{"errors": [{"message": "Invalid credentials"}, {"message": "ignored"}]}"#,
        ));
        match result {
            Err(ApiError::Remote(message)) => assert_eq!(message, "Invalid credentials"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn envelope_with_errors_and_data_is_still_a_fault() {
        let result = unwrap_envelope(envelope(
            r#"{"data": {"login": {}}, "errors": [{"message": "nope"}]}"#,
        ));
        assert!(matches!(result, Err(ApiError::Remote(message)) if message == "nope"));
    }

    #[test]
    fn envelope_error_without_message_gets_fallback() {
        let result = unwrap_envelope(envelope(r#"{"errors": [{}]}"#));
        assert!(matches!(
            result,
            Err(ApiError::Remote(message)) if message == "GraphQL request failed"
        ));
    }

    #[test]
    fn envelope_with_empty_error_list_returns_data() {
        let value = unwrap_envelope(envelope(r#"{"data": {"products": []}, "errors": []}"#))
            .unwrap();
        assert_eq!(value["products"], serde_json::json!([]));
    }

    #[test]
    fn envelope_without_data_returns_null() {
        let value = unwrap_envelope(envelope(r#"{}"#)).unwrap();
        assert!(value.is_null());
    }

    #[tokio::test]
    async fn authenticated_request_without_session_never_touches_the_network() {
        let gateway = gateway();
        let result = gateway
            .request(queries::GET_CART, serde_json::json!({"userId": "u1"}), true)
            .await;
        // An attempted send to port 0 would come back as Transport.
        assert!(matches!(result, Err(ApiError::Unauthenticated)));
    }

    #[tokio::test]
    async fn cart_item_operations_require_a_session() {
        let gateway = gateway();
        assert!(matches!(
            gateway.update_cart_item("ci1", 2).await,
            Err(ApiError::Unauthenticated)
        ));
        assert!(matches!(
            gateway.remove_cart_item("ci1").await,
            Err(ApiError::Unauthenticated)
        ));
    }

    #[tokio::test]
    async fn authenticated_request_with_session_attempts_the_call() {
        let gateway = gateway();
        gateway.session().set(
            "tok",
            &SessionUser {
                id: "u1".to_string(),
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                is_admin: false,
            },
        );

        let result = gateway
            .request(queries::GET_CART, serde_json::json!({"userId": "u1"}), true)
            .await;
        assert!(matches!(result, Err(ApiError::Transport(_))));
    }
}
