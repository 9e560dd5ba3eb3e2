//! Durable local key-value storage.
//!
//! Models the browser-style storage the views share: string keys to string
//! values, with three well-known keys. Controllers receive a [`Storage`]
//! handle instead of reading ambient state, so tests can substitute
//! doubles and hosts can pick the backend.

mod file;
mod memory;

pub use file::JsonFileStorage;
pub use memory::MemoryStorage;

use thiserror::Error;

/// Key holding the serialized moderation collection.
pub const PRODUCTS_KEY: &str = "products";

/// Key holding the serialized seller report rows.
pub const SELLER_REPORTS_KEY: &str = "sellerReports";

/// Key holding the opaque bearer credential.
pub const AUTH_TOKEN_KEY: &str = "authToken";

/// Errors from the storage backend itself.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backend cannot serve requests (full, disabled, torn down).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Errors from a store layered on top of [`Storage`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage backend failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Stored or outgoing data failed to (de)serialize.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Durable string key-value storage.
pub trait Storage: Send + Sync {
    /// Read the value at `key`, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend fails.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` at `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend fails.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value at `key`; removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend fails.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
