//! Estimate and invoice listing: filter by status and search, then sort.

use crate::api::{BillingDocument, DocumentListData, DocumentStatus};

use super::sorting::{sort_by_field, DocumentSortField, SortDirection};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentQuery {
    pub status: Option<DocumentStatus>,
    /// Case-insensitive substring over document number and client name.
    pub search: Option<String>,
    pub sort_by: DocumentSortField,
    pub direction: SortDirection,
}

impl DocumentQuery {
    fn matches(&self, doc: &BillingDocument) -> bool {
        if let Some(status) = self.status {
            if doc.status != status {
                return false;
            }
        }
        let needle = match self.search.as_deref().map(str::trim) {
            Some(needle) if !needle.is_empty() => needle.to_lowercase(),
            _ => return true,
        };
        doc.number.to_lowercase().contains(&needle)
            || doc
                .client_name
                .as_deref()
                .is_some_and(|name| name.to_lowercase().contains(&needle))
    }
}

pub fn list_documents(documents: Vec<BillingDocument>, query: &DocumentQuery) -> DocumentListData {
    let total_count = documents.len();
    let mut filtered: Vec<BillingDocument> =
        documents.into_iter().filter(|d| query.matches(d)).collect();
    sort_by_field(&mut filtered, query.sort_by, query.direction);

    DocumentListData {
        filtered_count: filtered.len(),
        filtered_total_amount: filtered.iter().map(|d| d.total_amount).sum(),
        documents: filtered,
        total_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{DocumentId, DocumentKind};
    use chrono::NaiveDate;

    fn doc(id: i64, client: &str, status: DocumentStatus, amount: f64, day: u32) -> BillingDocument {
        BillingDocument {
            id: DocumentId::new(id),
            number: format!("EST-{:04}", id),
            kind: DocumentKind::Estimate,
            client_name: Some(client.to_string()),
            status,
            issue_date: NaiveDate::from_ymd_opt(2026, 10, day).unwrap(),
            expiry_date: None,
            total_amount: amount,
        }
    }

    fn sample() -> Vec<BillingDocument> {
        vec![
            doc(1, "Harbor HOA", DocumentStatus::Sent, 400.0, 3),
            doc(2, "Marina Club", DocumentStatus::Accepted, 150.0, 1),
            doc(3, "Bayside Villas", DocumentStatus::Sent, 99.5, 2),
        ]
    }

    #[test]
    fn test_default_query_sorts_by_issue_date() {
        let list = list_documents(sample(), &DocumentQuery::default());
        let ids: Vec<_> = list.documents.iter().map(|d| d.id.value()).collect();
        assert_eq!(ids, vec![2, 3, 1]);
        assert_eq!(list.total_count, 3);
        assert_eq!(list.filtered_count, 3);
    }

    #[test]
    fn test_status_filter_and_total() {
        let query = DocumentQuery {
            status: Some(DocumentStatus::Sent),
            sort_by: DocumentSortField::TotalAmount,
            direction: SortDirection::Desc,
            ..Default::default()
        };
        let list = list_documents(sample(), &query);
        let ids: Vec<_> = list.documents.iter().map(|d| d.id.value()).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!((list.filtered_total_amount - 499.5).abs() < 1e-9);
    }

    #[test]
    fn test_search_matches_number_or_client() {
        let query = DocumentQuery {
            search: Some("marina".to_string()),
            ..Default::default()
        };
        assert_eq!(list_documents(sample(), &query).filtered_count, 1);

        let query = DocumentQuery {
            search: Some("est-0003".to_string()),
            ..Default::default()
        };
        let list = list_documents(sample(), &query);
        assert_eq!(list.documents[0].id.value(), 3);
    }
}
