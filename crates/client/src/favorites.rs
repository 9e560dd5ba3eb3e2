//! Favorites toggling with confirm-then-apply reconciliation.
//!
//! Membership mirrors the server at load time and flips locally only
//! after the server acknowledges a toggle, so the displayed state never
//! diverges from a confirmed server toggle. Between request and response
//! the display still shows the previous value; perceived latency is the
//! round trip, not a render.

use std::collections::HashSet;
use std::sync::Arc;

use shopfront_core::ProductId;

use crate::api::ShopApi;
use crate::notify::Notifier;
use crate::policy::UpdatePolicy;
use crate::session::SessionToken;

/// Favorite membership for the authenticated user.
pub struct FavoritesController<A: ShopApi> {
    api: A,
    notifier: Arc<dyn Notifier>,
    favorites: HashSet<ProductId>,
    in_flight: HashSet<ProductId>,
}

impl<A: ShopApi> FavoritesController<A> {
    /// Local membership flips only after server acknowledgment.
    pub const POLICY: UpdatePolicy = UpdatePolicy::ConfirmThenApply;

    #[must_use]
    pub fn new(api: A, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            notifier,
            favorites: HashSet::new(),
            in_flight: HashSet::new(),
        }
    }

    /// Replace local membership with the server's view.
    ///
    /// On failure the current set is kept and the error is logged; the
    /// view keeps rendering whatever it had.
    pub async fn sync_from_server(&mut self, token: &SessionToken) {
        match self.api.my_favourites(token).await {
            Ok(ids) => self.favorites = ids.into_iter().collect(),
            Err(error) => tracing::error!(%error, "failed to fetch favorites"),
        }
    }

    /// Toggle membership for one product: single attempt, XOR on success,
    /// unchanged plus an error notification on failure.
    ///
    /// A toggle for an ID that already has a request in flight is ignored
    /// rather than queued, so a rapid double-click cannot land two
    /// conflicting toggles on the server.
    pub async fn toggle(&mut self, token: &SessionToken, product_id: ProductId) {
        if !self.in_flight.insert(product_id) {
            tracing::debug!(%product_id, "favorite toggle already in flight, ignoring");
            return;
        }
        let result = self.api.toggle_favourite(token, product_id).await;
        self.in_flight.remove(&product_id);

        match result {
            Ok(()) => {
                // XOR, not a re-fetch: flip whatever we had.
                if !self.favorites.remove(&product_id) {
                    self.favorites.insert(product_id);
                }
            }
            Err(error) => {
                tracing::error!(%error, %product_id, "error toggling favorite");
                self.notifier.error("Error updating favorites");
            }
        }
    }

    #[must_use]
    pub fn is_favorite(&self, product_id: ProductId) -> bool {
        self.favorites.contains(&product_id)
    }

    /// Current membership set.
    #[must_use]
    pub const fn favorites(&self) -> &HashSet<ProductId> {
        &self.favorites
    }
}
