//! Shopfront Core - Shared types library.
//!
//! This crate provides the common types used across Shopfront components:
//! - `client` - the state synchronization layer (stores and controllers)
//! - host shells that render the resulting state
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, prices, moderation status, and the records
//!   exchanged with the remote service and local storage

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
