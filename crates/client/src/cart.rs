//! Cart toggling with server-message-only reconciliation.
//!
//! Deliberately pessimistic, unlike favorites: no local cart state is
//! mutated in this flow at all. The server's plain-text reply is surfaced
//! verbatim, styled by status class, and the authoritative cart view is
//! refreshed elsewhere.

use std::sync::Arc;

use shopfront_core::ProductId;

use crate::api::ShopApi;
use crate::notify::Notifier;
use crate::policy::UpdatePolicy;
use crate::session::SessionToken;

/// Cart membership toggles for the authenticated user.
pub struct CartController<A: ShopApi> {
    api: A,
    notifier: Arc<dyn Notifier>,
}

impl<A: ShopApi> CartController<A> {
    /// Only the server's message is surfaced; local state never moves.
    pub const POLICY: UpdatePolicy = UpdatePolicy::ServerMessageOnly;

    #[must_use]
    pub fn new(api: A, notifier: Arc<dyn Notifier>) -> Self {
        Self { api, notifier }
    }

    /// Request a cart toggle for one product.
    ///
    /// Without a token this short-circuits to a single "please log in"
    /// warning and performs no network call. Otherwise the server's reply
    /// text is shown as a success or error notification depending on the
    /// status class; a request that never completes gets a fixed error.
    pub async fn toggle(&self, token: Option<&SessionToken>, product_id: ProductId) {
        let Some(token) = token else {
            self.notifier.warning("Please login first.");
            return;
        };

        match self.api.toggle_cart(token, product_id).await {
            Ok(reply) if reply.accepted => self.notifier.success(&reply.message),
            Ok(reply) => self.notifier.error(&reply.message),
            Err(error) => {
                tracing::error!(%error, %product_id, "error toggling cart");
                self.notifier.error("Failed to update cart.");
            }
        }
    }
}
