//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SHOPFRONT_API_BASE_URL` - Base URL of the remote product service
//!   (e.g., `https://api.example.com/api`)
//!
//! ## Optional
//! - `SHOPFRONT_STORAGE_DIR` - Directory for durable local storage; when
//!   absent, state lives in memory for the lifetime of the process

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;
use url::Url;

use crate::storage::{JsonFileStorage, MemoryStorage, Storage, StorageError};

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Client application configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the remote product service
    pub api_base_url: Url,
    /// Directory for durable local storage (in-memory when `None`)
    pub storage_dir: Option<PathBuf>,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_base_url = get_required_env("SHOPFRONT_API_BASE_URL")?
            .parse::<Url>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("SHOPFRONT_API_BASE_URL".to_string(), e.to_string())
            })?;
        let storage_dir = get_optional_env("SHOPFRONT_STORAGE_DIR").map(PathBuf::from);

        Ok(Self {
            api_base_url,
            storage_dir,
        })
    }

    /// Build the storage backend selected by this configuration.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the storage directory cannot be created.
    pub fn storage(&self) -> Result<Arc<dyn Storage>, StorageError> {
        Ok(match &self.storage_dir {
            Some(dir) => Arc::new(JsonFileStorage::new(dir)?),
            None => Arc::new(MemoryStorage::default()),
        })
    }
}

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
