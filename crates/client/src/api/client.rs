//! HTTP implementation of [`ShopApi`] over `reqwest`.

use reqwest::StatusCode;
use url::Url;

use shopfront_core::{ChatMessage, Product, ProductId};

use super::types::{ApiProduct, FavouriteEntry};
use super::{ApiError, CartReply, ShopApi};
use crate::session::SessionToken;

/// REST client for the remote product service.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    base: String,
}

impl HttpApi {
    /// Create a client for the service at `base_url`.
    #[must_use]
    pub fn new(base_url: &Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: base_url.as_str().trim_end_matches('/').to_string(),
        }
    }

    async fn get_products(&self, path: &str) -> Result<Vec<Product>, ApiError> {
        let response = self
            .client
            .get(format!("{}/{path}", self.base))
            .send()
            .await?;
        let body = read_success_body(response).await?;
        let products: Vec<ApiProduct> = serde_json::from_str(&body)?;
        Ok(products.into_iter().map(Product::from).collect())
    }
}

/// Consume the response body, mapping non-success statuses to
/// [`ApiError::Status`] with whatever body text was available.
async fn read_success_body(response: reqwest::Response) -> Result<String, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response.text().await?)
    } else {
        Err(status_error(status, response).await)
    }
}

async fn status_error(status: StatusCode, response: reqwest::Response) -> ApiError {
    ApiError::Status {
        status: status.as_u16(),
        body: response.text().await.unwrap_or_default(),
    }
}

impl ShopApi for HttpApi {
    async fn random_products(&self) -> Result<Vec<Product>, ApiError> {
        self.get_products("products/random").await
    }

    async fn top_selling(&self) -> Result<Vec<Product>, ApiError> {
        self.get_products("product-statistics/top-selling").await
    }

    async fn my_favourites(&self, token: &SessionToken) -> Result<Vec<ProductId>, ApiError> {
        let response = self
            .client
            .get(format!("{}/favourites/my", self.base))
            .bearer_auth(token.expose())
            .send()
            .await?;
        let body = read_success_body(response).await?;
        let entries: Vec<FavouriteEntry> = serde_json::from_str(&body)?;
        Ok(entries.into_iter().map(|e| e.product_id).collect())
    }

    async fn toggle_favourite(
        &self,
        token: &SessionToken,
        product_id: ProductId,
    ) -> Result<(), ApiError> {
        let response = self
            .client
            .post(format!(
                "{}/favourites/toggle?productId={product_id}",
                self.base
            ))
            .bearer_auth(token.expose())
            .send()
            .await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(status_error(status, response).await)
        }
    }

    async fn toggle_cart(
        &self,
        token: &SessionToken,
        product_id: ProductId,
    ) -> Result<CartReply, ApiError> {
        let response = self
            .client
            .post(format!("{}/cart/toggle?productId={product_id}", self.base))
            .bearer_auth(token.expose())
            .send()
            .await?;
        // The body is the user-facing message either way; only the status
        // class decides how it is styled.
        let accepted = response.status().is_success();
        let message = response.text().await.unwrap_or_default();
        Ok(CartReply { accepted, message })
    }

    async fn send_to_admin(&self, token: &SessionToken, text: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .post(format!("{}/chat/send-to-admin", self.base))
            .bearer_auth(token.expose())
            // The endpoint takes the message as a bare JSON string.
            .json(&text)
            .send()
            .await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(status_error(status, response).await)
        }
    }

    async fn conversation(&self, token: &SessionToken) -> Result<Vec<ChatMessage>, ApiError> {
        let response = self
            .client
            .get(format!("{}/chat/admin-seller-conversation", self.base))
            .bearer_auth(token.expose())
            .send()
            .await?;
        let body = read_success_body(response).await?;
        Ok(serde_json::from_str(&body)?)
    }
}
