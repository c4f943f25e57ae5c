use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::schedule::{ScheduleItem, ScheduleKey};

// =========================================================
// Technician route types
// =========================================================

/// Ordered stop list for one technician on one date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoutePlan {
    pub technician: String,
    pub date: NaiveDate,
    pub stops: Vec<ScheduleItem>,
    /// Sum of the stops' estimated durations, in minutes.
    pub total_estimated_minutes: u32,
}

/// Manual sequencing action applied to a route.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum RouteAction {
    MoveUp { index: usize },
    MoveDown { index: usize },
    /// Alphabetical by address.
    Optimize,
}

/// Stateless reorder request: current order in, new order out.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteReorderRequest {
    pub technician: String,
    pub date: NaiveDate,
    /// Current manual order. Empty means the default (time-ordered) route.
    #[serde(default)]
    pub order: Vec<ScheduleKey>,
    #[serde(flatten)]
    pub action: RouteAction,
}

/// Route path for the route view
pub const ROUTES_PATH: &str = "/schedule/routes";
/// Route path for the stateless reorder action
pub const ROUTES_REORDER_PATH: &str = "/schedule/routes/reorder";
