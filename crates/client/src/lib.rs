//! Shopfront client synchronization layer.
//!
//! Keeps three views of storefront state consistent: in-memory controller
//! state, a durable local key-value store, and the remote authoritative
//! REST API. Presentation is out of scope - host shells consume the state
//! these controllers expose.
//!
//! # Architecture
//!
//! - [`api`] - REST client for the remote product service ([`api::ShopApi`]
//!   seam plus the [`api::HttpApi`] implementation)
//! - [`storage`] - durable local key-value storage behind the
//!   [`storage::Storage`] trait
//! - [`moderation`] - admin product list with block/unblock/delete,
//!   persisted locally and independent of the remote service
//! - [`favorites`] / [`cart`] - toggle controllers with explicit
//!   per-operation [`policy::UpdatePolicy`] flags
//! - [`chat`] - seller/admin conversation with replace-all refresh
//! - [`catalog`] - random/top-selling product loads with fallback
//! - [`notify`] / [`session`] / [`config`] / [`telemetry`] - the seams a
//!   host shell wires in
//!
//! Everything runs on a single logical thread; network calls are
//! suspension points, and no controller state is guarded by locks.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod cart;
pub mod catalog;
pub mod chat;
pub mod config;
pub mod favorites;
pub mod moderation;
pub mod notify;
pub mod policy;
pub mod reports;
pub mod session;
pub mod storage;
pub mod telemetry;
