//! Product records as held by the moderation store and the catalog.

use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;
use crate::types::price::Price;
use crate::types::status::ModerationStatus;

/// A product in the admin's moderation view.
///
/// Records are created externally (seed/import) and mutated only by
/// block/unblock/delete actions; deletion is a hard removal, not a
/// tombstone. Legacy records persisted without a `status` field default to
/// [`ModerationStatus::Unblocked`] on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub price: Price,
    pub stock: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller: Option<String>,
    /// Image URL, when the record carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub status: ModerationStatus,
}
