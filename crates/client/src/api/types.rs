//! Wire DTOs for the remote product service.
//!
//! Each endpoint gets an explicit response shape parsed at the boundary;
//! nothing downstream touches raw JSON.

use serde::Deserialize;

use shopfront_core::{ModerationStatus, Price, Product, ProductId};

/// Product summary as returned by the catalog endpoints.
///
/// The service omits fields freely on summaries; everything but the ID,
/// name, and price is optional on the wire. Moderation status is a local
/// concept, so converted products always start `Unblocked`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiProduct {
    pub product_id: ProductId,
    pub name: String,
    pub price: Price,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub seller: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl From<ApiProduct> for Product {
    fn from(api: ApiProduct) -> Self {
        Self {
            id: api.product_id,
            name: api.name,
            category: api.category,
            price: api.price,
            stock: api.stock,
            seller: api.seller,
            image: api.image,
            status: ModerationStatus::Unblocked,
        }
    }
}

/// One row of `GET /favourites/my`.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavouriteEntry {
    pub product_id: ProductId,
}
