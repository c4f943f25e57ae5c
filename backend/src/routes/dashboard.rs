use serde::{Deserialize, Serialize};

use super::schedule::ScheduleItem;
use crate::models::{BillingDocument, Role};

// =========================================================
// Dashboard types
// =========================================================

/// Business-wide counters served by `/api/dashboard/summary`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_clients: usize,
    pub active_technicians: usize,
    pub open_work_orders: usize,
    pub active_maintenance_orders: usize,
    pub scheduled_today: usize,
    /// Items without a scheduled date.
    pub unscheduled: usize,
    pub pending_estimates: usize,
    pub outstanding_invoice_amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboard {
    pub summary: DashboardSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficeDashboard {
    pub summary: DashboardSummary,
    pub today: Vec<ScheduleItem>,
    /// Open work orders nobody is assigned to yet.
    pub unassigned: Vec<ScheduleItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicianDashboard {
    pub technician: String,
    /// Today's stops in route order.
    pub today: Vec<ScheduleItem>,
    /// Own items after today, soonest first.
    pub upcoming: Vec<ScheduleItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientDashboard {
    pub client: String,
    pub upcoming_visits: Vec<ScheduleItem>,
    pub open_estimates: Vec<BillingDocument>,
    pub outstanding_invoices: Vec<BillingDocument>,
}

/// One dashboard per role.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "role", content = "dashboard", rename_all = "snake_case")]
pub enum DashboardView {
    Admin(AdminDashboard),
    OfficeStaff(OfficeDashboard),
    Technician(TechnicianDashboard),
    Client(ClientDashboard),
}

impl DashboardView {
    pub fn role(&self) -> Role {
        match self {
            DashboardView::Admin(_) => Role::Admin,
            DashboardView::OfficeStaff(_) => Role::OfficeStaff,
            DashboardView::Technician(_) => Role::Technician,
            DashboardView::Client(_) => Role::Client,
        }
    }
}

/// Route path for the summary counters
pub const DASHBOARD_SUMMARY_PATH: &str = "/dashboard/summary";
/// Route path for the role dashboard
pub const DASHBOARD_PATH: &str = "/dashboard";
