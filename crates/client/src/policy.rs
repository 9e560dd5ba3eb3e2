//! Per-operation update policies.
//!
//! Favorites and cart deliberately reconcile with the server differently.
//! Each controller declares its policy as an associated constant so the
//! asymmetry reads as a decision, not an accident.

/// How a controller reconciles local state with the remote service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdatePolicy {
    /// Wait for server acknowledgment, then apply the change to local
    /// state (favorites: flip membership only after a 2xx response).
    ConfirmThenApply,
    /// Never mutate local state; surface only the server's response
    /// message (cart: the authoritative view is refreshed elsewhere).
    ServerMessageOnly,
}
