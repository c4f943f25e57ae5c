//! Work orders: one-off service tasks (repairs, installs, inspections).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use super::dates::deserialize_optional_date;
use crate::api::{ClientId, TechnicianId, WorkOrderId};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, Default,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum WorkOrderStatus {
    #[default]
    Pending,
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl WorkOrderStatus {
    /// Whether the order still needs work (drives the "open work orders" counter).
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Pending | Self::Scheduled | Self::InProgress)
    }
}

/// Priority ordering is significant: `Low < Medium < High < Urgent`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    Display,
    Default,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrder {
    pub id: WorkOrderId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: String,
    #[serde(default)]
    pub status: WorkOrderStatus,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub client_id: Option<ClientId>,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub technician_id: Option<TechnicianId>,
    #[serde(default)]
    pub technician_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub scheduled_date: Option<NaiveDate>,
    /// `HH:MM`, 24-hour.
    #[serde(default)]
    pub scheduled_time: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    /// Minutes.
    #[serde(default)]
    pub estimated_duration: Option<u32>,
}

/// Submitted work order form, before validation and id assignment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkOrder {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub client_id: Option<ClientId>,
    #[serde(default)]
    pub technician_id: Option<TechnicianId>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub scheduled_date: Option<NaiveDate>,
    #[serde(default)]
    pub scheduled_time: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub estimated_duration: Option<u32>,
}

impl NewWorkOrder {
    /// Initial status for a freshly accepted order: it is `scheduled` only when
    /// both a date and a technician were supplied.
    pub fn initial_status(&self) -> WorkOrderStatus {
        if self.scheduled_date.is_some() && self.technician_id.is_some() {
            WorkOrderStatus::Scheduled
        } else {
            WorkOrderStatus::Pending
        }
    }
}
