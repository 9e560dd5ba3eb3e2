//! Catalog loads for the home view.
//!
//! Random and top-selling products come straight from the remote service
//! on every load; nothing is cached between loads. Failures degrade, not
//! break: the random section falls back to a bundled seed list so the
//! page is never empty, the top-selling section just goes blank.

use shopfront_core::{ModerationStatus, Price, Product, ProductId};

use crate::api::ShopApi;

/// How many random products the home view features.
pub const FEATURED_LIMIT: usize = 10;

/// In-memory product lists for the home view.
pub struct Catalog<A: ShopApi> {
    api: A,
    random: Vec<Product>,
    top: Vec<Product>,
}

impl<A: ShopApi> Catalog<A> {
    #[must_use]
    pub fn new(api: A) -> Self {
        Self {
            api,
            random: Vec::new(),
            top: Vec::new(),
        }
    }

    /// Fetch the random product list, falling back to the bundled seed
    /// list when the service is unreachable.
    pub async fn load_random(&mut self) {
        match self.api.random_products().await {
            Ok(products) => self.random = products,
            Err(error) => {
                tracing::error!(%error, "failed to fetch products, using seed data");
                self.random = seed_products();
            }
        }
    }

    /// Fetch the top-selling list; on failure the section is empty.
    pub async fn load_top(&mut self) {
        match self.api.top_selling().await {
            Ok(products) => self.top = products,
            Err(error) => {
                tracing::error!(%error, "failed to fetch top products");
                self.top.clear();
            }
        }
    }

    /// The full random list, in service order.
    #[must_use]
    pub fn random(&self) -> &[Product] {
        &self.random
    }

    /// The first [`FEATURED_LIMIT`] random products.
    #[must_use]
    pub fn featured(&self) -> &[Product] {
        let end = self.random.len().min(FEATURED_LIMIT);
        self.random.get(..end).unwrap_or_default()
    }

    #[must_use]
    pub fn top_selling(&self) -> &[Product] {
        &self.top
    }
}

/// Bundled fallback products shown when the catalog fetch fails.
fn seed_products() -> Vec<Product> {
    let seed = |id: i64, name: &str, category: &str, price: i64, stock: i64| Product {
        id: ProductId::new(id),
        name: name.to_string(),
        category: Some(category.to_string()),
        price: Price::from(price),
        stock,
        seller: None,
        image: None,
        status: ModerationStatus::Unblocked,
    };

    vec![
        seed(1, "Wireless Headphones", "Electronics", 59, 24),
        seed(2, "Ceramic Mug", "Kitchen", 12, 80),
        seed(3, "Desk Lamp", "Home", 34, 15),
        seed(4, "Canvas Backpack", "Accessories", 45, 32),
        seed(5, "Running Shoes", "Sportswear", 78, 12),
        seed(6, "Notebook Set", "Stationery", 9, 150),
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::api::{ApiError, CartReply};
    use crate::session::SessionToken;
    use shopfront_core::ChatMessage;

    struct StubApi {
        random: Result<Vec<Product>, ()>,
        top: Result<Vec<Product>, ()>,
    }

    fn status_error() -> ApiError {
        ApiError::Status {
            status: 503,
            body: String::new(),
        }
    }

    impl ShopApi for StubApi {
        async fn random_products(&self) -> Result<Vec<Product>, ApiError> {
            self.random.clone().map_err(|()| status_error())
        }

        async fn top_selling(&self) -> Result<Vec<Product>, ApiError> {
            self.top.clone().map_err(|()| status_error())
        }

        async fn my_favourites(&self, _token: &SessionToken) -> Result<Vec<ProductId>, ApiError> {
            unreachable!()
        }

        async fn toggle_favourite(
            &self,
            _token: &SessionToken,
            _product_id: ProductId,
        ) -> Result<(), ApiError> {
            unreachable!()
        }

        async fn toggle_cart(
            &self,
            _token: &SessionToken,
            _product_id: ProductId,
        ) -> Result<CartReply, ApiError> {
            unreachable!()
        }

        async fn send_to_admin(&self, _token: &SessionToken, _text: &str) -> Result<(), ApiError> {
            unreachable!()
        }

        async fn conversation(&self, _token: &SessionToken) -> Result<Vec<ChatMessage>, ApiError> {
            unreachable!()
        }
    }

    fn many_products(count: i64) -> Vec<Product> {
        (1..=count)
            .map(|id| Product {
                id: ProductId::new(id),
                name: format!("Product {id}"),
                category: None,
                price: Price::from(id),
                stock: 1,
                seller: None,
                image: None,
                status: ModerationStatus::Unblocked,
            })
            .collect()
    }

    #[tokio::test]
    async fn test_load_random_success() {
        let mut catalog = Catalog::new(StubApi {
            random: Ok(many_products(3)),
            top: Ok(Vec::new()),
        });
        catalog.load_random().await;
        assert_eq!(catalog.random().len(), 3);
        assert_eq!(catalog.featured().len(), 3);
    }

    #[tokio::test]
    async fn test_load_random_failure_falls_back_to_seed() {
        let mut catalog = Catalog::new(StubApi {
            random: Err(()),
            top: Ok(Vec::new()),
        });
        catalog.load_random().await;
        assert!(!catalog.random().is_empty());
        assert_eq!(catalog.random(), seed_products().as_slice());
    }

    #[tokio::test]
    async fn test_featured_caps_at_limit() {
        let mut catalog = Catalog::new(StubApi {
            random: Ok(many_products(25)),
            top: Ok(Vec::new()),
        });
        catalog.load_random().await;
        assert_eq!(catalog.featured().len(), FEATURED_LIMIT);
        assert_eq!(catalog.random().len(), 25);
    }

    #[tokio::test]
    async fn test_load_top_failure_clears_section() {
        let mut catalog = Catalog::new(StubApi {
            random: Ok(Vec::new()),
            top: Err(()),
        });
        // A stale list from an earlier load must not survive the failure.
        catalog.top = many_products(2);
        catalog.load_top().await;
        assert!(catalog.top_selling().is_empty());
    }
}
