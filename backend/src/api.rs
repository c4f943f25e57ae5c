//! Public API surface for the backend.
//!
//! Identifier newtypes plus the DTO types served over HTTP. All types derive
//! Serialize/Deserialize for JSON serialization.

pub use crate::routes::board::BoardColumn;
pub use crate::routes::board::BoardData;
pub use crate::routes::calendar::CalendarDay;
pub use crate::routes::calendar::CalendarMonth;
pub use crate::routes::dashboard::AdminDashboard;
pub use crate::routes::dashboard::ClientDashboard;
pub use crate::routes::dashboard::DashboardSummary;
pub use crate::routes::dashboard::DashboardView;
pub use crate::routes::dashboard::OfficeDashboard;
pub use crate::routes::dashboard::TechnicianDashboard;
pub use crate::routes::documents::DocumentListData;
pub use crate::routes::route_plan::RouteAction;
pub use crate::routes::route_plan::RoutePlan;
pub use crate::routes::schedule::ItemStatus;
pub use crate::routes::schedule::ScheduleItem;
pub use crate::routes::schedule::ScheduleItemType;
pub use crate::routes::schedule::ScheduleKey;
pub use crate::routes::schedule::ScheduleListData;

pub use crate::models::{
    BillingDocument, Client, DocumentKind, DocumentStatus, Frequency, MaintenanceOrder,
    MaintenanceStatus, NewWorkOrder, Priority, Role, SessionContext, SessionUser,
    TechnicianWithUser, WorkOrder, WorkOrderStatus,
};

crate::define_id_type!(i64, WorkOrderId);
crate::define_id_type!(i64, MaintenanceOrderId);
crate::define_id_type!(i64, TechnicianId);
crate::define_id_type!(i64, ClientId);
crate::define_id_type!(i64, UserId);
crate::define_id_type!(i64, DocumentId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display_and_parse() {
        let id = WorkOrderId::new(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(" 42 ".parse::<WorkOrderId>().unwrap(), id);
        assert!("forty".parse::<ClientId>().is_err());
    }

    #[test]
    fn test_id_serializes_as_plain_number() {
        let json = serde_json::to_string(&TechnicianId::new(7)).unwrap();
        assert_eq!(json, "7");
        let back: TechnicianId = serde_json::from_str("7").unwrap();
        assert_eq!(i64::from(back), 7);
    }
}
