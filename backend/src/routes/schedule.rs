use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::models::{MaintenanceStatus, Priority, WorkOrderStatus};

// =========================================================
// Schedule item types
// =========================================================

/// Which source collection a schedule item was projected from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ScheduleItemType {
    WorkOrder,
    MaintenanceOrder,
}

/// Union of the work order and maintenance order status vocabularies.
///
/// Variant order is the board column order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ItemStatus {
    Pending,
    Scheduled,
    InProgress,
    Active,
    Paused,
    Completed,
    Cancelled,
}

impl ItemStatus {
    pub const ALL: [ItemStatus; 7] = [
        ItemStatus::Pending,
        ItemStatus::Scheduled,
        ItemStatus::InProgress,
        ItemStatus::Active,
        ItemStatus::Paused,
        ItemStatus::Completed,
        ItemStatus::Cancelled,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ItemStatus::Pending => "Pending",
            ItemStatus::Scheduled => "Scheduled",
            ItemStatus::InProgress => "In Progress",
            ItemStatus::Active => "Active",
            ItemStatus::Paused => "Paused",
            ItemStatus::Completed => "Completed",
            ItemStatus::Cancelled => "Cancelled",
        }
    }
}

impl From<WorkOrderStatus> for ItemStatus {
    fn from(status: WorkOrderStatus) -> Self {
        match status {
            WorkOrderStatus::Pending => ItemStatus::Pending,
            WorkOrderStatus::Scheduled => ItemStatus::Scheduled,
            WorkOrderStatus::InProgress => ItemStatus::InProgress,
            WorkOrderStatus::Completed => ItemStatus::Completed,
            WorkOrderStatus::Cancelled => ItemStatus::Cancelled,
        }
    }
}

impl From<MaintenanceStatus> for ItemStatus {
    fn from(status: MaintenanceStatus) -> Self {
        match status {
            MaintenanceStatus::Active => ItemStatus::Active,
            MaintenanceStatus::Paused => ItemStatus::Paused,
            MaintenanceStatus::Completed => ItemStatus::Completed,
            MaintenanceStatus::Cancelled => ItemStatus::Cancelled,
        }
    }
}

/// Identity of a schedule item. Ids repeat across the two partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ScheduleKey {
    #[serde(rename = "type")]
    pub item_type: ScheduleItemType,
    pub id: i64,
}

/// Normalized, display-only projection of a work order or maintenance order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleItem {
    pub id: i64,
    pub title: String,
    #[serde(rename = "type")]
    pub item_type: ScheduleItemType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub status: ItemStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technician_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_duration: Option<u32>,
}

impl ScheduleItem {
    pub fn key(&self) -> ScheduleKey {
        ScheduleKey {
            item_type: self.item_type,
            id: self.id,
        }
    }
}

/// List view payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleListData {
    pub items: Vec<ScheduleItem>,
    /// Items before filtering.
    pub total_count: usize,
    pub filtered_count: usize,
    /// Distinct technician names across the unfiltered set, for filter pickers.
    pub technicians: Vec<String>,
    /// Distinct categories across the unfiltered set.
    pub categories: Vec<String>,
}

/// Route path for the list view
pub const SCHEDULE_PATH: &str = "/schedule";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_serializes_type_and_camel_case() {
        let item = ScheduleItem {
            id: 3,
            title: "Weekly maintenance".to_string(),
            item_type: ScheduleItemType::MaintenanceOrder,
            category: None,
            status: ItemStatus::Active,
            priority: None,
            technician_name: Some("Ana".to_string()),
            client_name: None,
            scheduled_date: NaiveDate::from_ymd_opt(2026, 10, 17),
            scheduled_time: None,
            address: None,
            estimated_duration: None,
        };
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["type"], "maintenance_order");
        assert_eq!(value["technicianName"], "Ana");
        assert_eq!(value["scheduledDate"], "2026-10-17");
        assert!(value.get("clientName").is_none());
    }

    #[test]
    fn test_status_conversions() {
        assert_eq!(
            ItemStatus::from(WorkOrderStatus::InProgress),
            ItemStatus::InProgress
        );
        assert_eq!(ItemStatus::from(MaintenanceStatus::Paused), ItemStatus::Paused);
        assert_eq!(ItemStatus::InProgress.to_string(), "in_progress");
    }

    #[test]
    fn test_keys_distinguish_partitions() {
        let wo = ScheduleKey {
            item_type: ScheduleItemType::WorkOrder,
            id: 1,
        };
        let mo = ScheduleKey {
            item_type: ScheduleItemType::MaintenanceOrder,
            id: 1,
        };
        assert_ne!(wo, mo);
    }
}
