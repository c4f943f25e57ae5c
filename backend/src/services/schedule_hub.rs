//! The schedule hub: one snapshot of every schedule record, and the views
//! built from it.
//!
//! A request loads a [`HubSnapshot`] (three concurrent fetches), then asks
//! for the list, calendar, board or route view. The views never touch the
//! repository.

use chrono::NaiveDate;
use log::debug;

use super::calendar::{build_month, CalendarCursor, CalendarError};
use super::filter::ScheduleFilter;
use super::sorting::{sort_by_field, ScheduleSortField, SortDirection};
use crate::api::{
    BoardData, CalendarMonth, RoutePlan, ScheduleItem, ScheduleListData, TechnicianWithUser,
    WorkOrder,
};
use crate::db::{FullRepository, RepositoryResult};
use crate::models::MaintenanceOrder;

use super::aggregator::aggregate;
use super::board::build_board;

#[derive(Debug, Clone, Default)]
pub struct HubSnapshot {
    pub work_orders: Vec<WorkOrder>,
    pub maintenance_orders: Vec<MaintenanceOrder>,
    pub technicians: Vec<TechnicianWithUser>,
    /// Work orders then maintenance orders, projected.
    pub items: Vec<ScheduleItem>,
}

impl HubSnapshot {
    pub fn from_records(
        work_orders: Vec<WorkOrder>,
        maintenance_orders: Vec<MaintenanceOrder>,
        technicians: Vec<TechnicianWithUser>,
    ) -> Self {
        let items = aggregate(&work_orders, &maintenance_orders, &technicians);
        Self {
            work_orders,
            maintenance_orders,
            technicians,
            items,
        }
    }

    /// Technician names for the filter picker: the directory plus any name
    /// only seen on items, sorted and deduplicated.
    pub fn technician_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .technicians
            .iter()
            .map(|t| t.name().to_string())
            .chain(self.items.iter().filter_map(|i| i.technician_name.clone()))
            .collect();
        names.sort();
        names.dedup();
        names
    }

    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = self
            .items
            .iter()
            .filter_map(|i| i.category.clone())
            .filter(|c| !c.trim().is_empty())
            .collect();
        categories.sort();
        categories.dedup();
        categories
    }

    fn filtered(&self, filter: &ScheduleFilter, today: NaiveDate) -> Vec<ScheduleItem> {
        filter.apply(self.items.clone(), today)
    }
}

/// Fetch work orders, maintenance orders and technicians concurrently.
///
/// The first failing fetch aborts the snapshot.
pub async fn load_snapshot<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<HubSnapshot> {
    let (work_orders, maintenance_orders, technicians) = tokio::try_join!(
        repo.list_work_orders(),
        repo.list_maintenance_orders(),
        repo.list_technicians(),
    )?;

    let snapshot = HubSnapshot::from_records(work_orders, maintenance_orders, technicians);
    debug!(
        "Loaded hub snapshot: {} work orders, {} maintenance orders, {} items",
        snapshot.work_orders.len(),
        snapshot.maintenance_orders.len(),
        snapshot.items.len()
    );
    Ok(snapshot)
}

/// List view parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleQuery {
    pub filter: ScheduleFilter,
    pub sort_by: ScheduleSortField,
    pub direction: SortDirection,
}

/// Filter, then sort, the snapshot items.
pub fn list_view(snapshot: &HubSnapshot, query: &ScheduleQuery, today: NaiveDate) -> ScheduleListData {
    let mut items = snapshot.filtered(&query.filter, today);
    sort_by_field(&mut items, query.sort_by, query.direction);

    ScheduleListData {
        total_count: snapshot.items.len(),
        filtered_count: items.len(),
        items,
        technicians: snapshot.technician_names(),
        categories: snapshot.categories(),
    }
}

pub fn calendar_view(
    snapshot: &HubSnapshot,
    filter: &ScheduleFilter,
    cursor: CalendarCursor,
    today: NaiveDate,
) -> Result<CalendarMonth, CalendarError> {
    let items = snapshot.filtered(filter, today);
    build_month(cursor, &items, today)
}

/// Filter and sort, then split into status columns.
pub fn board_view(snapshot: &HubSnapshot, query: &ScheduleQuery, today: NaiveDate) -> BoardData {
    let mut items = snapshot.filtered(&query.filter, today);
    sort_by_field(&mut items, query.sort_by, query.direction);
    build_board(&items)
}

/// Route for `technician` on `date`, optionally optimized.
pub fn route_view(
    snapshot: &HubSnapshot,
    technician: &str,
    date: NaiveDate,
    optimize: bool,
) -> RoutePlan {
    let mut plan = RoutePlan::build(&snapshot.items, technician, date);
    if optimize {
        plan.optimize();
    }
    plan
}

#[cfg(test)]
#[path = "schedule_hub_tests.rs"]
mod schedule_hub_tests;
