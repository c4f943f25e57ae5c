use super::repositories::LocalRepository;
use super::services::{self, CreateWorkOrderError};
use crate::api::{ClientId, NewWorkOrder, WorkOrderStatus};
use crate::models::parse_seed_json_str;

fn repo_with_client() -> LocalRepository {
    LocalRepository::from_seed(
        parse_seed_json_str(r#"{"clients": [{"id": 3, "name": "Blue Lagoon HOA"}]}"#).unwrap(),
    )
}

fn form(title: &str) -> NewWorkOrder {
    NewWorkOrder {
        title: title.to_string(),
        category: "repair".to_string(),
        client_id: Some(ClientId(3)),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_create_work_order_stores_valid_form() {
    let repo = repo_with_client();
    let created = services::create_work_order(&repo, &form("Pump noise"))
        .await
        .unwrap();

    assert_eq!(created.status, WorkOrderStatus::Pending);
    assert_eq!(created.client_name.as_deref(), Some("Blue Lagoon HOA"));

    let fetched = services::get_work_order(&repo, created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_create_work_order_rejects_invalid_form() {
    let repo = repo_with_client();
    let mut bad = form("   ");
    bad.client_id = Some(ClientId(77));

    let err = services::create_work_order(&repo, &bad).await.unwrap_err();
    match err {
        CreateWorkOrderError::Validation(errors) => {
            assert!(errors.fields.contains_key("title"));
            assert!(errors.fields.contains_key("clientId"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(repo.work_order_count(), 0);
}

#[tokio::test]
async fn test_create_work_order_surfaces_repository_failure() {
    let repo = repo_with_client();
    repo.set_healthy(false);

    let err = services::create_work_order(&repo, &form("Pump noise"))
        .await
        .unwrap_err();
    assert!(matches!(err, CreateWorkOrderError::Repository(_)));
}

#[tokio::test]
async fn test_health_check_passthrough() {
    let repo = LocalRepository::new();
    assert!(services::health_check(&repo).await.unwrap());
    repo.set_healthy(false);
    assert!(!services::health_check(&repo).await.unwrap());
}
