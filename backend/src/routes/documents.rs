use serde::{Deserialize, Serialize};

use crate::models::BillingDocument;

// =========================================================
// Estimates / invoices list types
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentListData {
    pub documents: Vec<BillingDocument>,
    pub total_count: usize,
    pub filtered_count: usize,
    /// Sum of `totalAmount` over the filtered documents.
    pub filtered_total_amount: f64,
}

/// Route path for estimates
pub const ESTIMATES_PATH: &str = "/estimates";
/// Route path for invoices
pub const INVOICES_PATH: &str = "/invoices";
