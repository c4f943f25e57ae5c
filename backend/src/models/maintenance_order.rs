//! Maintenance orders: recurring service schedules that generate visits.

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use super::dates::deserialize_optional_date;
use crate::api::{ClientId, MaintenanceOrderId, TechnicianId};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, Default,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MaintenanceStatus {
    #[default]
    Active,
    Paused,
    Completed,
    Cancelled,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, Default,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Frequency {
    #[default]
    Weekly,
    BiWeekly,
    Monthly,
    Quarterly,
}

impl Frequency {
    /// Human label used in generated schedule item titles.
    pub fn label(&self) -> &'static str {
        match self {
            Frequency::Weekly => "Weekly",
            Frequency::BiWeekly => "Bi-weekly",
            Frequency::Monthly => "Monthly",
            Frequency::Quarterly => "Quarterly",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceOrder {
    pub id: MaintenanceOrderId,
    #[serde(default)]
    pub client_id: Option<ClientId>,
    #[serde(default)]
    pub client_name: Option<String>,
    /// Only the id is stored; the name is resolved against the technician list.
    #[serde(default)]
    pub technician_id: Option<TechnicianId>,
    #[serde(default)]
    pub frequency: Frequency,
    #[serde(default)]
    pub day_of_week: Option<Weekday>,
    #[serde(default)]
    pub status: MaintenanceStatus,
    #[serde(default)]
    pub service_type: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub next_service_date: Option<NaiveDate>,
    #[serde(default)]
    pub preferred_time: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub estimated_duration: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_labels() {
        assert_eq!(Frequency::Weekly.label(), "Weekly");
        assert_eq!(Frequency::BiWeekly.label(), "Bi-weekly");
    }

    #[test]
    fn test_maintenance_order_defaults() {
        let order: MaintenanceOrder = serde_json::from_str(r#"{"id": 3}"#).unwrap();
        assert_eq!(order.status, MaintenanceStatus::Active);
        assert_eq!(order.frequency, Frequency::Weekly);
        assert!(order.technician_id.is_none());
    }

    #[test]
    fn test_maintenance_order_parses_schedule_fields() {
        let json = r#"{
            "id": 4,
            "technicianId": 2,
            "frequency": "bi_weekly",
            "dayOfWeek": "Tue",
            "nextServiceDate": "2026-10-20",
            "preferredTime": "08:00"
        }"#;
        let order: MaintenanceOrder = serde_json::from_str(json).unwrap();
        assert_eq!(order.frequency, Frequency::BiWeekly);
        assert_eq!(order.day_of_week, Some(Weekday::Tue));
        assert_eq!(order.technician_id, Some(TechnicianId::new(2)));
    }

    #[test]
    fn test_next_service_date_accepts_timestamp() {
        let order: MaintenanceOrder =
            serde_json::from_str(r#"{"id": 5, "nextServiceDate": "2026-10-21T11:00:00"}"#).unwrap();
        assert_eq!(order.next_service_date, NaiveDate::from_ymd_opt(2026, 10, 21));
    }
}
