//! High-level data service layer.
//!
//! Repository-agnostic operations used by the HTTP handlers and the schedule
//! hub. Anything that must behave the same regardless of the backing store
//! (intake validation, snapshot loading) lives here rather than in the
//! repositories.
//!
//! # Usage
//!
//! ```no_run
//! use pool_hub::db::{services, repositories::LocalRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = LocalRepository::new();
//!     let orders = services::list_work_orders(&repo).await?;
//!     println!("Found {} work orders", orders.len());
//!     Ok(())
//! }
//! ```

use log::{debug, info, warn};

use super::repository::{FullRepository, RepositoryError, RepositoryResult};
use crate::api::{
    BillingDocument, Client, DocumentKind, NewWorkOrder, TechnicianWithUser, WorkOrder,
    WorkOrderId,
};
use crate::models::MaintenanceOrder;
use crate::services::validation::{validate_new_work_order, ValidationErrors};

/// Why a work order submission was not stored.
#[derive(Debug, thiserror::Error)]
pub enum CreateWorkOrderError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

// ==================== Health & Connection ====================

/// Check if the data source is healthy.
pub async fn health_check<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

// ==================== Records ====================

pub async fn list_work_orders<R: FullRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<Vec<WorkOrder>> {
    repo.list_work_orders().await
}

pub async fn get_work_order<R: FullRepository + ?Sized>(
    repo: &R,
    id: WorkOrderId,
) -> RepositoryResult<WorkOrder> {
    repo.get_work_order(id).await
}

pub async fn list_maintenance_orders<R: FullRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<Vec<MaintenanceOrder>> {
    repo.list_maintenance_orders().await
}

pub async fn list_technicians<R: FullRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<Vec<TechnicianWithUser>> {
    repo.list_technicians().await
}

pub async fn list_clients<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<Vec<Client>> {
    repo.list_clients().await
}

pub async fn list_documents<R: FullRepository + ?Sized>(
    repo: &R,
    kind: DocumentKind,
) -> RepositoryResult<Vec<BillingDocument>> {
    repo.list_documents(kind).await
}

// ==================== Intake ====================

/// Validate and store a new work order.
///
/// The client list is fetched to check `clientId`; nothing is written when
/// any field fails.
pub async fn create_work_order<R: FullRepository + ?Sized>(
    repo: &R,
    form: &NewWorkOrder,
) -> Result<WorkOrder, CreateWorkOrderError> {
    let clients = repo.list_clients().await?;

    if let Err(errors) = validate_new_work_order(form, &clients) {
        warn!(
            "Rejected work order '{}': {} invalid field(s)",
            form.title,
            errors.fields.len()
        );
        return Err(errors.into());
    }

    let created = repo.create_work_order(form).await?;
    info!("Stored work order {} with status {}", created.id, created.status);
    debug!("Work order payload: {:?}", created);
    Ok(created)
}
