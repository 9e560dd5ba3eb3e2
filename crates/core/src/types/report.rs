//! Seller report summaries for the admin reports table.

use serde::{Deserialize, Serialize};

use crate::types::id::SellerReportId;
use crate::types::price::Price;

/// Aggregate sales figures for one seller's store.
///
/// These are static demo rows re-seeded into local storage on every load;
/// nothing updates them incrementally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerReport {
    pub id: SellerReportId,
    pub store_name: String,
    pub total_sales: Price,
    pub profit: Price,
    pub orders: i64,
    pub discounts: Price,
}
