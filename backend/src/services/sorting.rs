//! Sort stage of the schedule and document pipelines.
//!
//! Sorting is stable: equal keys keep their incoming order in both
//! directions. Missing values always go last.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum_macros::{Display, EnumString};

use crate::api::{BillingDocument, ScheduleItem};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, Default,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Types that can be ordered by one of several named fields.
pub trait SortBy<F: Copy> {
    fn compare_by(&self, other: &Self, field: F, direction: SortDirection) -> Ordering;
}

/// Sort `items` in place by `field`. Stable and idempotent.
pub fn sort_by_field<T, F>(items: &mut [T], field: F, direction: SortDirection)
where
    T: SortBy<F>,
    F: Copy,
{
    items.sort_by(|a, b| a.compare_by(b, field, direction));
}

/// Compare two optional keys: present values ordered by `direction`, absent last.
pub(crate) fn compare_present<T: PartialOrd>(
    a: Option<T>,
    b: Option<T>,
    direction: SortDirection,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => {
            let ord = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
            match direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn lowercase(value: Option<&str>) -> Option<String> {
    value.map(str::to_lowercase)
}

// =========================================================
// Schedule items
// =========================================================

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, Default,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ScheduleSortField {
    /// Scheduled date, then scheduled time.
    #[default]
    Date,
    Title,
    ClientName,
    Priority,
}

impl SortBy<ScheduleSortField> for ScheduleItem {
    fn compare_by(
        &self,
        other: &Self,
        field: ScheduleSortField,
        direction: SortDirection,
    ) -> Ordering {
        match field {
            ScheduleSortField::Date => {
                compare_present(self.scheduled_date, other.scheduled_date, direction).then_with(
                    || {
                        compare_present(
                            self.scheduled_time.as_deref(),
                            other.scheduled_time.as_deref(),
                            direction,
                        )
                    },
                )
            }
            ScheduleSortField::Title => compare_present(
                Some(self.title.to_lowercase()),
                Some(other.title.to_lowercase()),
                direction,
            ),
            ScheduleSortField::ClientName => compare_present(
                lowercase(self.client_name.as_deref()),
                lowercase(other.client_name.as_deref()),
                direction,
            ),
            ScheduleSortField::Priority => compare_present(self.priority, other.priority, direction),
        }
    }
}

// =========================================================
// Billing documents
// =========================================================

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, Default,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DocumentSortField {
    #[default]
    IssueDate,
    ExpiryDate,
    TotalAmount,
    ClientName,
}

impl SortBy<DocumentSortField> for BillingDocument {
    fn compare_by(
        &self,
        other: &Self,
        field: DocumentSortField,
        direction: SortDirection,
    ) -> Ordering {
        match field {
            DocumentSortField::IssueDate => {
                compare_present(Some(self.issue_date), Some(other.issue_date), direction)
            }
            DocumentSortField::ExpiryDate => {
                compare_present(self.expiry_date, other.expiry_date, direction)
            }
            DocumentSortField::TotalAmount => compare_present(
                Some(self.total_amount).filter(|v| !v.is_nan()),
                Some(other.total_amount).filter(|v| !v.is_nan()),
                direction,
            ),
            DocumentSortField::ClientName => compare_present(
                lowercase(self.client_name.as_deref()),
                lowercase(other.client_name.as_deref()),
                direction,
            ),
        }
    }
}

#[cfg(test)]
#[path = "sorting_tests.rs"]
mod sorting_tests;
