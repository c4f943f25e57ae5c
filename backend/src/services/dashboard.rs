//! Role dashboards.
//!
//! [`build_dashboard`] matches on the session role and hands off to one
//! builder per role. Builders are pure functions over [`DashboardData`].

use chrono::NaiveDate;
use log::debug;

use super::schedule_hub::{load_snapshot, HubSnapshot};
use super::sorting::{sort_by_field, ScheduleSortField, SortDirection};
use crate::api::{
    AdminDashboard, BillingDocument, Client, ClientDashboard, DashboardSummary, DashboardView,
    DocumentKind, ItemStatus, OfficeDashboard, RoutePlan, ScheduleItem, SessionContext,
    SessionUser, TechnicianDashboard,
};
use crate::db::{FullRepository, RepositoryResult};
use crate::models::{same_technician, MaintenanceStatus, Role, TechnicianDirectory};

/// How many upcoming items a technician dashboard lists.
pub const UPCOMING_LIMIT: usize = 10;

/// Everything the dashboards read.
#[derive(Debug, Clone, Default)]
pub struct DashboardData {
    pub snapshot: HubSnapshot,
    pub clients: Vec<Client>,
    pub estimates: Vec<BillingDocument>,
    pub invoices: Vec<BillingDocument>,
}

/// Load the hub snapshot and the billing records concurrently.
pub async fn load_dashboard_data<R: FullRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<DashboardData> {
    let (snapshot, clients, estimates, invoices) = tokio::try_join!(
        load_snapshot(repo),
        repo.list_clients(),
        repo.list_documents(DocumentKind::Estimate),
        repo.list_documents(DocumentKind::Invoice),
    )?;
    Ok(DashboardData {
        snapshot,
        clients,
        estimates,
        invoices,
    })
}

fn is_closed(item: &ScheduleItem) -> bool {
    matches!(item.status, ItemStatus::Completed | ItemStatus::Cancelled)
}

fn sorted_by_date(mut items: Vec<ScheduleItem>) -> Vec<ScheduleItem> {
    sort_by_field(&mut items, ScheduleSortField::Date, SortDirection::Asc);
    items
}

pub fn compute_summary(data: &DashboardData, today: NaiveDate) -> DashboardSummary {
    let snapshot = &data.snapshot;
    DashboardSummary {
        total_clients: data.clients.len(),
        active_technicians: snapshot.technicians.iter().filter(|t| t.active).count(),
        open_work_orders: snapshot
            .work_orders
            .iter()
            .filter(|w| w.status.is_open())
            .count(),
        active_maintenance_orders: snapshot
            .maintenance_orders
            .iter()
            .filter(|m| m.status == MaintenanceStatus::Active)
            .count(),
        scheduled_today: snapshot
            .items
            .iter()
            .filter(|i| i.scheduled_date == Some(today) && i.status != ItemStatus::Cancelled)
            .count(),
        unscheduled: snapshot
            .items
            .iter()
            .filter(|i| i.scheduled_date.is_none() && !is_closed(i))
            .count(),
        pending_estimates: data
            .estimates
            .iter()
            .filter(|e| e.status.is_pending_estimate())
            .count(),
        outstanding_invoice_amount: data
            .invoices
            .iter()
            .filter(|i| i.status.is_outstanding_invoice())
            .map(|i| i.total_amount)
            .sum(),
    }
}

pub fn build_admin(data: &DashboardData, today: NaiveDate) -> AdminDashboard {
    AdminDashboard {
        summary: compute_summary(data, today),
    }
}

pub fn build_office(data: &DashboardData, today: NaiveDate) -> OfficeDashboard {
    let items = &data.snapshot.items;
    let today_items = items
        .iter()
        .filter(|i| i.scheduled_date == Some(today) && i.status != ItemStatus::Cancelled)
        .cloned()
        .collect();
    let unassigned = items
        .iter()
        .filter(|i| i.technician_name.is_none() && !is_closed(i))
        .cloned()
        .collect();

    OfficeDashboard {
        summary: compute_summary(data, today),
        today: sorted_by_date(today_items),
        unassigned: sorted_by_date(unassigned),
    }
}

/// Technician name from the directory, falling back to the session name.
fn technician_name(user: &SessionUser, data: &DashboardData) -> String {
    let directory = TechnicianDirectory::from_technicians(&data.snapshot.technicians);
    user.technician_id
        .and_then(|id| directory.name_of(id))
        .unwrap_or(&user.name)
        .to_string()
}

pub fn build_technician(
    user: &SessionUser,
    data: &DashboardData,
    today: NaiveDate,
) -> TechnicianDashboard {
    let technician = technician_name(user, data);
    let route = RoutePlan::build(&data.snapshot.items, &technician, today);

    let upcoming: Vec<ScheduleItem> = data
        .snapshot
        .items
        .iter()
        .filter(|i| {
            same_technician(i.technician_name.as_deref(), &technician)
                && i.scheduled_date.is_some_and(|d| d > today)
                && !is_closed(i)
        })
        .cloned()
        .collect();
    let mut upcoming = sorted_by_date(upcoming);
    upcoming.truncate(UPCOMING_LIMIT);

    TechnicianDashboard {
        technician,
        today: route.stops,
        upcoming,
    }
}

fn client_name(user: &SessionUser, data: &DashboardData) -> String {
    user.client_id
        .and_then(|id| data.clients.iter().find(|c| c.id == id))
        .map_or_else(|| user.name.clone(), |c| c.name.clone())
}

fn same_client(candidate: Option<&str>, client: &str) -> bool {
    candidate.is_some_and(|name| name.trim().eq_ignore_ascii_case(client.trim()))
}

fn documents_for(
    docs: &[BillingDocument],
    client: &str,
    keep: impl Fn(&BillingDocument) -> bool,
) -> Vec<BillingDocument> {
    docs.iter()
        .filter(|d| same_client(d.client_name.as_deref(), client) && keep(d))
        .cloned()
        .collect()
}

pub fn build_client(user: &SessionUser, data: &DashboardData, today: NaiveDate) -> ClientDashboard {
    let client = client_name(user, data);

    let visits = data
        .snapshot
        .items
        .iter()
        .filter(|i| {
            same_client(i.client_name.as_deref(), &client)
                && i.scheduled_date.is_some_and(|d| d >= today)
                && !is_closed(i)
        })
        .cloned()
        .collect();

    ClientDashboard {
        upcoming_visits: sorted_by_date(visits),
        open_estimates: documents_for(&data.estimates, &client, |d| {
            d.status.is_pending_estimate()
        }),
        outstanding_invoices: documents_for(&data.invoices, &client, |d| {
            d.status.is_outstanding_invoice()
        }),
        client,
    }
}

/// Dashboard for the signed-in user, or `None` for an anonymous session.
pub fn build_dashboard(
    session: &SessionContext,
    data: &DashboardData,
    today: NaiveDate,
) -> Option<DashboardView> {
    let user = session.user()?;
    debug!("Building {} dashboard for user {}", user.role, user.id);
    Some(match user.role {
        Role::Admin => DashboardView::Admin(build_admin(data, today)),
        Role::OfficeStaff => DashboardView::OfficeStaff(build_office(data, today)),
        Role::Technician => DashboardView::Technician(build_technician(user, data, today)),
        Role::Client => DashboardView::Client(build_client(user, data, today)),
    })
}

#[cfg(test)]
#[path = "dashboard_tests.rs"]
mod dashboard_tests;
