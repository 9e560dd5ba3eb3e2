//! Remote product service client.
//!
//! # Architecture
//!
//! - Plain REST, one endpoint per operation; the base URL comes from
//!   configuration
//! - Responses are parsed into explicit DTOs at the boundary
//!   ([`types`]); malformed bodies become [`ApiError::Decode`] instead of
//!   propagating raw structures
//! - Controllers depend on the [`ShopApi`] trait, not the concrete
//!   [`HttpApi`], so tests inject stub implementations

mod client;
pub mod types;

pub use client::HttpApi;

use thiserror::Error;

use shopfront_core::{ChatMessage, Product, ProductId};

use crate::session::SessionToken;

/// Errors that can occur when calling the remote service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed (never completed).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Service returned a non-success status.
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body failed to parse.
    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The server's reply to a cart toggle: plain text, surfaced verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartReply {
    /// Whether the status class was 2xx.
    pub accepted: bool,
    /// The response body, displayed as-is.
    pub message: String,
}

/// The remote REST endpoints this layer consumes.
#[allow(async_fn_in_trait)]
pub trait ShopApi {
    /// `GET /products/random`
    async fn random_products(&self) -> Result<Vec<Product>, ApiError>;

    /// `GET /product-statistics/top-selling`
    async fn top_selling(&self) -> Result<Vec<Product>, ApiError>;

    /// `GET /favourites/my`
    async fn my_favourites(&self, token: &SessionToken) -> Result<Vec<ProductId>, ApiError>;

    /// `POST /favourites/toggle?productId={id}` - 2xx means the toggle
    /// was applied server-side; no body is required.
    async fn toggle_favourite(
        &self,
        token: &SessionToken,
        product_id: ProductId,
    ) -> Result<(), ApiError>;

    /// `POST /cart/toggle?productId={id}` - the body text is the
    /// user-facing message for both success and rejection, so a non-2xx
    /// status is still an `Ok(CartReply)` here.
    async fn toggle_cart(
        &self,
        token: &SessionToken,
        product_id: ProductId,
    ) -> Result<CartReply, ApiError>;

    /// `POST /chat/send-to-admin` - the body is the message text as a raw
    /// JSON string, not wrapped in an object.
    async fn send_to_admin(&self, token: &SessionToken, text: &str) -> Result<(), ApiError>;

    /// `GET /chat/admin-seller-conversation`
    async fn conversation(&self, token: &SessionToken) -> Result<Vec<ChatMessage>, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = ApiError::Status {
            status: 404,
            body: "no such product".to_string(),
        };
        assert_eq!(err.to_string(), "unexpected status 404: no such product");
    }
}
