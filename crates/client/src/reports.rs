//! Seller reports store.
//!
//! The reports table runs on static demo rows: every load re-seeds the
//! `sellerReports` storage key and then reads it back, trusting storage
//! as the source of truth. Nothing updates these rows incrementally.

use std::sync::Arc;

use shopfront_core::{Price, SellerReport, SellerReportId};

use crate::storage::{SELLER_REPORTS_KEY, Storage, StoreError};

/// The admin's seller reports table.
pub struct ReportsStore {
    storage: Arc<dyn Storage>,
    reports: Vec<SellerReport>,
}

impl ReportsStore {
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage,
            reports: Vec::new(),
        }
    }

    /// Seed storage with the demo rows, then read them back.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend fails or the read-back data is
    /// corrupt.
    pub fn load(&mut self) -> Result<&[SellerReport], StoreError> {
        let seeded = serde_json::to_string(&seed_reports())?;
        self.storage.set(SELLER_REPORTS_KEY, &seeded)?;

        let raw = self
            .storage
            .get(SELLER_REPORTS_KEY)?
            .unwrap_or_else(|| "[]".to_string());
        self.reports = serde_json::from_str(&raw)?;
        Ok(&self.reports)
    }

    /// The rows from the last load.
    #[must_use]
    pub fn reports(&self) -> &[SellerReport] {
        &self.reports
    }
}

fn seed_reports() -> Vec<SellerReport> {
    let report = |id: i64, store_name: &str, total_sales: i64, profit: i64, orders, discounts| {
        SellerReport {
            id: SellerReportId::new(id),
            store_name: store_name.to_string(),
            total_sales: Price::from(total_sales),
            profit: Price::from(profit),
            orders,
            discounts: Price::from(discounts),
        }
    };

    vec![
        report(1, "TechZone", 12000, 3000, 85, 500),
        report(2, "BeautyWorld", 8500, 2200, 60, 300),
        report(3, "Fashionista", 15300, 4100, 110, 720),
    ]
}
