//! Core types for Shopfront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod chat;
pub mod id;
pub mod price;
pub mod product;
pub mod report;
pub mod status;

pub use chat::ChatMessage;
pub use id::*;
pub use price::Price;
pub use product::Product;
pub use report::SellerReport;
pub use status::ModerationStatus;
