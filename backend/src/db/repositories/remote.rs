//! REST-backed repository reading from the external pool hub API.
//!
//! Every call is a single request; failures surface as repository errors
//! and are never retried here.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::api::{
    BillingDocument, Client, DocumentKind, NewWorkOrder, TechnicianWithUser, WorkOrder,
    WorkOrderId,
};
use crate::db::repository::*;
use crate::models::MaintenanceOrder;

pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Connection settings for the upstream API.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteConfig {
    /// Base URL without a trailing slash, e.g. `https://hub.example.com`.
    pub base_url: String,
    pub timeout_secs: u64,
}

impl RemoteConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Read `POOL_HUB_API_URL` (required) from the environment.
    pub fn from_env() -> Result<Self, String> {
        let base_url = std::env::var("POOL_HUB_API_URL")
            .map_err(|_| "POOL_HUB_API_URL must be set for the remote repository".to_string())?;
        if base_url.trim().is_empty() {
            return Err("POOL_HUB_API_URL is empty".to_string());
        }
        Ok(Self::new(base_url.trim()))
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

pub struct RemoteRepository {
    client: reqwest::Client,
    config: RemoteConfig,
}

impl RemoteRepository {
    pub fn new(config: RemoteConfig) -> RepositoryResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                RepositoryError::configuration(format!("Failed to build HTTP client: {}", e))
            })?;
        log::info!("Remote repository targeting {}", config.base_url);
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, operation: &str) -> RepositoryResult<T> {
        log::debug!("GET {}", path);
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| RepositoryError::from(e).with_operation(operation))?;
        let resp = check_response(resp, operation).await?;
        resp.json::<T>()
            .await
            .map_err(|e| RepositoryError::from(e).with_operation(operation))
    }
}

/// Map non-success statuses to repository errors; 404 becomes `NotFound`.
async fn check_response(
    resp: reqwest::Response,
    operation: &str,
) -> RepositoryResult<reqwest::Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    let context = ErrorContext::new(operation).with_details(body);
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(RepositoryError::not_found_with_context(
            format!("Upstream returned {}", status),
            context,
        ));
    }
    let context = if status.is_server_error() {
        context.retryable()
    } else {
        context
    };
    Err(RepositoryError::UpstreamError {
        message: format!("Upstream returned {}", status),
        context,
    })
}

#[async_trait]
impl ScheduleRepository for RemoteRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        let resp = self
            .client
            .get(self.url("/api/clients"))
            .send()
            .await
            .map_err(|e| RepositoryError::from(e).with_operation("health_check"))?;
        Ok(resp.status().is_success())
    }

    async fn list_work_orders(&self) -> RepositoryResult<Vec<WorkOrder>> {
        self.get_json("/api/work-orders", "list_work_orders").await
    }

    async fn get_work_order(&self, id: WorkOrderId) -> RepositoryResult<WorkOrder> {
        self.get_json(&format!("/api/work-orders/{}", id), "get_work_order")
            .await
            .map_err(|e| e.with_entity("work_order"))
    }

    async fn create_work_order(&self, order: &NewWorkOrder) -> RepositoryResult<WorkOrder> {
        let operation = "create_work_order";
        let resp = self
            .client
            .post(self.url("/api/work-orders"))
            .json(order)
            .send()
            .await
            .map_err(|e| RepositoryError::from(e).with_operation(operation))?;
        let resp = check_response(resp, operation).await?;
        resp.json::<WorkOrder>()
            .await
            .map_err(|e| RepositoryError::from(e).with_operation(operation))
    }

    async fn list_maintenance_orders(&self) -> RepositoryResult<Vec<MaintenanceOrder>> {
        self.get_json("/api/maintenance-orders", "list_maintenance_orders")
            .await
    }

    async fn list_technicians(&self) -> RepositoryResult<Vec<TechnicianWithUser>> {
        self.get_json("/api/technicians-with-users", "list_technicians")
            .await
    }

    async fn list_clients(&self) -> RepositoryResult<Vec<Client>> {
        self.get_json("/api/clients", "list_clients").await
    }
}

#[async_trait]
impl BillingRepository for RemoteRepository {
    async fn list_documents(&self, kind: DocumentKind) -> RepositoryResult<Vec<BillingDocument>> {
        let path = match kind {
            DocumentKind::Estimate => "/api/estimates",
            DocumentKind::Invoice => "/api/invoices",
        };
        self.get_json(path, "list_documents").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_trims_trailing_slash() {
        let config = RemoteConfig::new("https://hub.example.com/");
        assert_eq!(config.base_url, "https://hub.example.com");
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.with_timeout(3).timeout_secs, 3);
    }

    #[test]
    fn test_url_join() {
        let repo = RemoteRepository::new(RemoteConfig::new("http://localhost:9000")).unwrap();
        assert_eq!(repo.url("/api/clients"), "http://localhost:9000/api/clients");
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_connection_error() {
        // Port 9 (discard) is closed on test hosts.
        let repo =
            RemoteRepository::new(RemoteConfig::new("http://127.0.0.1:9").with_timeout(2)).unwrap();
        let err = repo.list_clients().await.unwrap_err();
        assert!(err.is_upstream());
        assert_eq!(err.context().operation.as_deref(), Some("list_clients"));
    }
}
