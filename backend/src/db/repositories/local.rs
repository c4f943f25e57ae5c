//! In-memory local repository implementation.
//!
//! Stores every record in memory behind a `parking_lot::RwLock`. Used for
//! unit tests and for running the server from a seed file without an
//! upstream API.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::api::{
    BillingDocument, Client, ClientId, DocumentKind, NewWorkOrder, TechnicianWithUser,
    WorkOrder, WorkOrderId,
};
use crate::db::repository::*;
use crate::models::{MaintenanceOrder, SeedData};

/// In-memory local repository.
///
/// # Example
/// ```
/// use pool_hub::db::repositories::LocalRepository;
/// use pool_hub::db::ScheduleRepository;
///
/// # tokio_test_block_on(async {
/// let repo = LocalRepository::new();
/// assert!(repo.list_work_orders().await.unwrap().is_empty());
/// # });
/// # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Runtime::new().unwrap().block_on(f)
/// # }
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    work_orders: BTreeMap<WorkOrderId, WorkOrder>,
    maintenance_orders: Vec<MaintenanceOrder>,
    technicians: Vec<TechnicianWithUser>,
    clients: Vec<Client>,
    estimates: Vec<BillingDocument>,
    invoices: Vec<BillingDocument>,

    next_work_order_id: WorkOrderId,

    // Connection health
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            work_orders: BTreeMap::new(),
            maintenance_orders: Vec::new(),
            technicians: Vec::new(),
            clients: Vec::new(),
            estimates: Vec::new(),
            invoices: Vec::new(),
            next_work_order_id: WorkOrderId(1),
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Create a repository pre-populated from seed data.
    ///
    /// New work orders get ids above the highest seeded one.
    pub fn from_seed(seed: SeedData) -> Self {
        let repo = Self::new();
        repo.load_seed(seed);
        repo
    }

    /// Replace all stored records with the given seed data.
    pub fn load_seed(&self, seed: SeedData) {
        let mut data = self.data.write();
        let next_id = seed
            .work_orders
            .iter()
            .map(|w| w.id.0)
            .max()
            .unwrap_or(0)
            + 1;

        data.work_orders = seed.work_orders.into_iter().map(|w| (w.id, w)).collect();
        data.maintenance_orders = seed.maintenance_orders;
        data.technicians = seed.technicians;
        data.clients = seed.clients;
        data.estimates = seed.estimates;
        data.invoices = seed.invoices;
        data.next_work_order_id = WorkOrderId(next_id);

        log::debug!(
            "Loaded seed: {} work orders, {} maintenance orders, {} technicians, {} clients",
            data.work_orders.len(),
            data.maintenance_orders.len(),
            data.technicians.len(),
            data.clients.len()
        );
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    /// Clear all data from the repository.
    pub fn clear(&self) {
        let mut data = self.data.write();
        *data = LocalData {
            is_healthy: data.is_healthy,
            ..Default::default()
        };
    }

    /// Get the number of work orders stored.
    pub fn work_order_count(&self) -> usize {
        self.data.read().work_orders.len()
    }

    /// Helper to check health and return error if unhealthy.
    fn check_health(&self, operation: &str) -> RepositoryResult<()> {
        if !self.data.read().is_healthy {
            return Err(RepositoryError::connection("Data source is not healthy")
                .with_operation(operation));
        }
        Ok(())
    }

    fn client_name(data: &LocalData, id: Option<ClientId>) -> Option<String> {
        let id = id?;
        data.clients
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.clone())
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScheduleRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn list_work_orders(&self) -> RepositoryResult<Vec<WorkOrder>> {
        self.check_health("list_work_orders")?;
        Ok(self.data.read().work_orders.values().cloned().collect())
    }

    async fn get_work_order(&self, id: WorkOrderId) -> RepositoryResult<WorkOrder> {
        self.check_health("get_work_order")?;
        self.data.read().work_orders.get(&id).cloned().ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("Work order {} not found", id),
                ErrorContext::new("get_work_order")
                    .with_entity("work_order")
                    .with_entity_id(id),
            )
        })
    }

    async fn create_work_order(&self, order: &NewWorkOrder) -> RepositoryResult<WorkOrder> {
        self.check_health("create_work_order")?;
        let mut data = self.data.write();

        let id = data.next_work_order_id;
        data.next_work_order_id = WorkOrderId(id.0 + 1);

        let technician_name = order.technician_id.and_then(|tid| {
            data.technicians
                .iter()
                .find(|t| t.id == tid)
                .map(|t| t.name().to_string())
        });

        let created = WorkOrder {
            id,
            title: order.title.trim().to_string(),
            description: order.description.clone(),
            category: order.category.trim().to_string(),
            status: order.initial_status(),
            priority: order.priority.unwrap_or_default(),
            client_id: order.client_id,
            client_name: Self::client_name(&data, order.client_id),
            technician_id: order.technician_id,
            technician_name,
            scheduled_date: order.scheduled_date,
            scheduled_time: order.scheduled_time.clone(),
            address: order.address.clone(),
            estimated_duration: order.estimated_duration,
        };

        data.work_orders.insert(id, created.clone());
        log::info!("Created work order {} ({})", id, created.title);
        Ok(created)
    }

    async fn list_maintenance_orders(&self) -> RepositoryResult<Vec<MaintenanceOrder>> {
        self.check_health("list_maintenance_orders")?;
        Ok(self.data.read().maintenance_orders.clone())
    }

    async fn list_technicians(&self) -> RepositoryResult<Vec<TechnicianWithUser>> {
        self.check_health("list_technicians")?;
        Ok(self.data.read().technicians.clone())
    }

    async fn list_clients(&self) -> RepositoryResult<Vec<Client>> {
        self.check_health("list_clients")?;
        Ok(self.data.read().clients.clone())
    }
}

#[async_trait]
impl BillingRepository for LocalRepository {
    async fn list_documents(&self, kind: DocumentKind) -> RepositoryResult<Vec<BillingDocument>> {
        self.check_health("list_documents")?;
        let data = self.data.read();
        Ok(match kind {
            DocumentKind::Estimate => data.estimates.clone(),
            DocumentKind::Invoice => data.invoices.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Priority, TechnicianId, WorkOrderStatus};
    use crate::models::parse_seed_json_str;
    use chrono::NaiveDate;

    fn seeded() -> LocalRepository {
        let seed = parse_seed_json_str(
            r#"{
                "clients": [{"id": 1, "name": "Ada Pools"}],
                "technicians": [{"id": 4, "user": {"id": 40, "name": "Sam"}}],
                "workOrders": [
                    {"id": 9, "title": "Leak", "category": "repair", "status": "pending"}
                ],
                "estimates": [
                    {"id": 2, "number": "E-2", "kind": "estimate", "status": "sent",
                     "issueDate": "2024-05-01", "totalAmount": 120.0}
                ]
            }"#,
        )
        .unwrap();
        LocalRepository::from_seed(seed)
    }

    #[tokio::test]
    async fn test_new_ids_follow_seeded_ids() {
        let repo = seeded();
        let created = repo
            .create_work_order(&NewWorkOrder {
                title: " Filter swap ".into(),
                category: "maintenance".into(),
                client_id: Some(ClientId(1)),
                technician_id: Some(TechnicianId(4)),
                scheduled_date: NaiveDate::from_ymd_opt(2024, 6, 1),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(created.id, WorkOrderId(10));
        assert_eq!(created.title, "Filter swap");
        assert_eq!(created.status, WorkOrderStatus::Scheduled);
        assert_eq!(created.priority, Priority::Medium);
        assert_eq!(created.client_name.as_deref(), Some("Ada Pools"));
        assert_eq!(created.technician_name.as_deref(), Some("Sam"));
        assert_eq!(repo.work_order_count(), 2);
    }

    #[tokio::test]
    async fn test_get_missing_work_order() {
        let repo = seeded();
        let err = repo.get_work_order(WorkOrderId(99)).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound { .. }));
        assert_eq!(err.context().entity_id.as_deref(), Some("99"));
    }

    #[tokio::test]
    async fn test_unhealthy_repository_fails_reads() {
        let repo = seeded();
        repo.set_healthy(false);
        assert!(!repo.health_check().await.unwrap());
        let err = repo.list_clients().await.unwrap_err();
        assert!(err.is_upstream());
        assert_eq!(err.context().operation.as_deref(), Some("list_clients"));
    }

    #[tokio::test]
    async fn test_documents_by_kind() {
        let repo = seeded();
        assert_eq!(repo.list_documents(DocumentKind::Estimate).await.unwrap().len(), 1);
        assert!(repo.list_documents(DocumentKind::Invoice).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_clear_keeps_health_flag() {
        let repo = seeded();
        repo.set_healthy(false);
        repo.clear();
        assert_eq!(repo.work_order_count(), 0);
        assert!(!repo.health_check().await.unwrap());
    }
}
