//! Schedule records: work orders, maintenance orders, technicians and clients.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{Client, NewWorkOrder, TechnicianWithUser, WorkOrder, WorkOrderId};
use crate::models::MaintenanceOrder;

/// Repository trait for the records the schedule hub is built from.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    /// Check that the data source is reachable.
    ///
    /// # Returns
    /// * `Ok(true)` if healthy
    /// * `Ok(false)` if reachable but reporting a problem
    /// * `Err(RepositoryError)` if it could not be reached
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// List every work order.
    async fn list_work_orders(&self) -> RepositoryResult<Vec<WorkOrder>>;

    /// Fetch one work order.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` if no work order has this id
    async fn get_work_order(&self, id: WorkOrderId) -> RepositoryResult<WorkOrder>;

    /// Store a new work order and return it with its assigned id.
    ///
    /// Implementations do not validate; callers go through
    /// `db::services::create_work_order`.
    async fn create_work_order(&self, order: &NewWorkOrder) -> RepositoryResult<WorkOrder>;

    async fn list_maintenance_orders(&self) -> RepositoryResult<Vec<MaintenanceOrder>>;

    async fn list_technicians(&self) -> RepositoryResult<Vec<TechnicianWithUser>>;

    async fn list_clients(&self) -> RepositoryResult<Vec<Client>>;
}
