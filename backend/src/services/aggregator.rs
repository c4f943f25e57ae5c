//! Merges work orders and maintenance orders into one list of schedule items.

use crate::api::{ItemStatus, ScheduleItem, ScheduleItemType};
use crate::models::{MaintenanceOrder, TechnicianDirectory, TechnicianWithUser, WorkOrder};

pub(crate) fn project_work_order(order: &WorkOrder) -> ScheduleItem {
    ScheduleItem {
        id: order.id.value(),
        title: order.title.clone(),
        item_type: ScheduleItemType::WorkOrder,
        category: Some(order.category.clone()).filter(|c| !c.is_empty()),
        status: ItemStatus::from(order.status),
        priority: Some(order.priority),
        technician_name: order.technician_name.clone(),
        client_name: order.client_name.clone(),
        scheduled_date: order.scheduled_date,
        scheduled_time: order.scheduled_time.clone(),
        address: order.address.clone(),
        estimated_duration: order.estimated_duration,
    }
}

pub(crate) fn project_maintenance_order(
    order: &MaintenanceOrder,
    technicians: &TechnicianDirectory,
) -> ScheduleItem {
    ScheduleItem {
        id: order.id.value(),
        title: format!("{} maintenance", order.frequency.label()),
        item_type: ScheduleItemType::MaintenanceOrder,
        category: order.service_type.clone(),
        status: ItemStatus::from(order.status),
        priority: None,
        technician_name: order
            .technician_id
            .and_then(|id| technicians.name_of(id))
            .map(str::to_string),
        client_name: order.client_name.clone(),
        scheduled_date: order.next_service_date,
        scheduled_time: order.preferred_time.clone(),
        address: order.address.clone(),
        estimated_duration: order.estimated_duration,
    }
}

/// Project both collections into schedule items.
///
/// Work orders come first, then maintenance orders, each in input order. The
/// output always has `work_orders.len() + maintenance_orders.len()` items.
pub fn aggregate(
    work_orders: &[WorkOrder],
    maintenance_orders: &[MaintenanceOrder],
    technicians: &[TechnicianWithUser],
) -> Vec<ScheduleItem> {
    let directory = TechnicianDirectory::from_technicians(technicians);
    let mut items = Vec::with_capacity(work_orders.len() + maintenance_orders.len());
    items.extend(work_orders.iter().map(project_work_order));
    items.extend(
        maintenance_orders
            .iter()
            .map(|order| project_maintenance_order(order, &directory)),
    );
    items
}

#[cfg(test)]
#[path = "aggregator_tests.rs"]
mod aggregator_tests;
