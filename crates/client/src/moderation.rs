//! Local moderation store for the admin's product list.
//!
//! Single source of truth for each product's moderation status, persisted
//! under the `products` storage key and durable across reloads. The
//! remote service never sees moderation state; this store is deliberately
//! independent of it.
//!
//! Persistence is write-behind: every mutation updates the in-memory
//! collection first and then persists the whole collection synchronously.
//! A failing backend therefore leaves memory ahead of disk, and the error
//! propagates to the caller.

use std::str::FromStr;
use std::sync::Arc;

use shopfront_core::{ModerationStatus, Product, ProductId};

use crate::notify::Notifier;
use crate::storage::{PRODUCTS_KEY, Storage, StoreError};

/// Status filter for [`ModerationStore::list`].
///
/// `All` is the sentinel that bypasses the status match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Status(ModerationStatus),
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Status)
        }
    }
}

/// Result of filtering the product list.
///
/// An empty filter result is distinct from "the store has never been
/// loaded": consumers render "no products found" for the former and a
/// loading state for the latter.
#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    NotLoaded,
    Empty,
    Products(Vec<Product>),
}

/// The admin's product list with block/unblock/delete.
pub struct ModerationStore {
    storage: Arc<dyn Storage>,
    notifier: Arc<dyn Notifier>,
    products: Option<Vec<Product>>,
}

impl ModerationStore {
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            storage,
            notifier,
            products: None,
        }
    }

    /// Load the persisted collection; absent storage yields an empty one.
    ///
    /// Records missing a `status` (or carrying unrecognized status text)
    /// normalize to `Unblocked` during parsing. Normalization is
    /// idempotent - loading already-normalized data changes nothing.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend fails or the stored collection
    /// is corrupt.
    pub fn load(&mut self) -> Result<(), StoreError> {
        let products = match self.storage.get(PRODUCTS_KEY)? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => Vec::new(),
        };
        self.products = Some(products);
        Ok(())
    }

    /// Whether [`load`](Self::load) has run.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.products.is_some()
    }

    /// The loaded collection, in stored order.
    #[must_use]
    pub fn products(&self) -> Option<&[Product]> {
        self.products.as_deref()
    }

    /// Mark the product blocked and persist.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if persisting fails; the in-memory change has
    /// already been applied.
    pub fn block(&mut self, product_id: ProductId) -> Result<(), StoreError> {
        if self.set_status(product_id, ModerationStatus::Blocked)? {
            self.notifier.info("Product has been blocked");
        }
        Ok(())
    }

    /// Mark the product unblocked and persist.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if persisting fails; the in-memory change has
    /// already been applied.
    pub fn unblock(&mut self, product_id: ProductId) -> Result<(), StoreError> {
        if self.set_status(product_id, ModerationStatus::Unblocked)? {
            self.notifier.success("Product has been unblocked");
        }
        Ok(())
    }

    /// Remove the matching record and persist.
    ///
    /// The notification is error-styled for visual weight; the deletion
    /// succeeded.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if persisting fails; the in-memory change has
    /// already been applied.
    pub fn delete(&mut self, product_id: ProductId) -> Result<(), StoreError> {
        let Some(products) = self.products.as_mut() else {
            tracing::warn!(%product_id, "delete before load, ignoring");
            return Ok(());
        };
        products.retain(|p| p.id != product_id);
        self.persist()?;
        self.notifier.error("Product deleted");
        Ok(())
    }

    /// Filter the collection by status and a case-insensitive name query.
    #[must_use]
    pub fn list(&self, filter: StatusFilter, query: &str) -> Listing {
        let Some(products) = self.products.as_deref() else {
            return Listing::NotLoaded;
        };

        let query = query.to_lowercase();
        let matches: Vec<Product> = products
            .iter()
            .filter(|p| {
                let status_ok = match filter {
                    StatusFilter::All => true,
                    StatusFilter::Status(status) => p.status == status,
                };
                status_ok && p.name.to_lowercase().contains(&query)
            })
            .cloned()
            .collect();

        if matches.is_empty() {
            Listing::Empty
        } else {
            Listing::Products(matches)
        }
    }

    /// Replace only the status of the matching record, then persist. An
    /// unknown ID leaves the collection unchanged but still persists, as
    /// the admin view does. Returns `false` when the store is not loaded
    /// yet (logged no-op, no notification).
    fn set_status(
        &mut self,
        product_id: ProductId,
        status: ModerationStatus,
    ) -> Result<bool, StoreError> {
        let Some(products) = self.products.as_mut() else {
            tracing::warn!(%product_id, "status change before load, ignoring");
            return Ok(false);
        };
        for product in products.iter_mut() {
            if product.id == product_id {
                product.status = status;
            }
        }
        self.persist()?;
        Ok(true)
    }

    fn persist(&self) -> Result<(), StoreError> {
        let products = self.products.as_deref().unwrap_or_default();
        let raw = serde_json::to_string(products)?;
        self.storage.set(PRODUCTS_KEY, &raw)?;
        Ok(())
    }
}
