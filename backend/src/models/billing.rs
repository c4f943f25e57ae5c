//! Estimates and invoices, read-only for listing purposes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use super::dates::{deserialize_date, deserialize_optional_date};
use crate::api::DocumentId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DocumentKind {
    Estimate,
    Invoice,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, Default,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DocumentStatus {
    #[default]
    Draft,
    Sent,
    Accepted,
    Declined,
    Paid,
    Overdue,
    Expired,
}

impl DocumentStatus {
    /// An estimate that still waits on the client.
    pub fn is_pending_estimate(&self) -> bool {
        matches!(self, Self::Draft | Self::Sent)
    }

    /// An invoice that still has money owed on it.
    pub fn is_outstanding_invoice(&self) -> bool {
        matches!(self, Self::Sent | Self::Overdue)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BillingDocument {
    pub id: DocumentId,
    pub number: String,
    pub kind: DocumentKind,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub status: DocumentStatus,
    #[serde(deserialize_with = "deserialize_date")]
    pub issue_date: NaiveDate,
    /// Valid-until date for estimates, due date for invoices.
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default)]
    pub total_amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_status_predicates() {
        assert!(DocumentStatus::Sent.is_pending_estimate());
        assert!(!DocumentStatus::Accepted.is_pending_estimate());
        assert!(DocumentStatus::Overdue.is_outstanding_invoice());
        assert!(!DocumentStatus::Paid.is_outstanding_invoice());
    }

    #[test]
    fn test_document_parses() {
        let json = r#"{
            "id": 12,
            "number": "EST-0012",
            "kind": "estimate",
            "clientName": "Harbor HOA",
            "status": "sent",
            "issueDate": "2026-10-01",
            "expiryDate": "2026-10-31",
            "totalAmount": 1250.5
        }"#;
        let doc: BillingDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.kind, DocumentKind::Estimate);
        assert_eq!(doc.total_amount, 1250.5);
    }
}
