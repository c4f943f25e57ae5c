//! Estimates and invoices.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{BillingDocument, DocumentKind};

/// Repository trait for billing documents.
#[async_trait]
pub trait BillingRepository: Send + Sync {
    /// List every document of one kind.
    async fn list_documents(&self, kind: DocumentKind) -> RepositoryResult<Vec<BillingDocument>>;
}
