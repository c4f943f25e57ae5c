//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    CalendarParams, DocumentParams, HealthResponse, RouteParams, RouteReorderRequest,
    ScheduleParams, TodayParams,
};
use super::error::AppError;
use super::session::Session;
use super::state::AppState;
use crate::api::{
    BoardData, CalendarMonth, Client, DashboardSummary, DashboardView, DocumentKind,
    DocumentListData, MaintenanceOrder, NewWorkOrder, RoutePlan, ScheduleListData,
    SessionContext, TechnicianWithUser, WorkOrder, WorkOrderId,
};
use crate::db::services as db_services;
use crate::services::{dashboard, documents, schedule_hub};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

fn require_schedule_access(session: &SessionContext) -> Result<(), AppError> {
    if session.can_view_schedule() {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "Clients cannot view the schedule hub".to_string(),
        ))
    }
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let repo_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        repository: repo_status,
    }))
}

// =============================================================================
// Records
// =============================================================================

/// GET /api/work-orders
pub async fn list_work_orders(State(state): State<AppState>) -> HandlerResult<Vec<WorkOrder>> {
    Ok(Json(
        db_services::list_work_orders(state.repository.as_ref()).await?,
    ))
}

/// GET /api/work-orders/{id}
pub async fn get_work_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> HandlerResult<WorkOrder> {
    let order = db_services::get_work_order(state.repository.as_ref(), WorkOrderId::new(id)).await?;
    Ok(Json(order))
}

/// POST /api/work-orders
///
/// Validates the form; field errors come back as 422 with per-field messages.
pub async fn create_work_order(
    State(state): State<AppState>,
    Json(form): Json<NewWorkOrder>,
) -> Result<(StatusCode, Json<WorkOrder>), AppError> {
    let created = db_services::create_work_order(state.repository.as_ref(), &form).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/maintenance-orders
pub async fn list_maintenance_orders(
    State(state): State<AppState>,
) -> HandlerResult<Vec<MaintenanceOrder>> {
    Ok(Json(
        db_services::list_maintenance_orders(state.repository.as_ref()).await?,
    ))
}

/// GET /api/technicians-with-users
pub async fn list_technicians(
    State(state): State<AppState>,
) -> HandlerResult<Vec<TechnicianWithUser>> {
    Ok(Json(
        db_services::list_technicians(state.repository.as_ref()).await?,
    ))
}

/// GET /api/clients
pub async fn list_clients(State(state): State<AppState>) -> HandlerResult<Vec<Client>> {
    Ok(Json(db_services::list_clients(state.repository.as_ref()).await?))
}

async fn document_listing(
    state: &AppState,
    kind: DocumentKind,
    params: &DocumentParams,
) -> HandlerResult<DocumentListData> {
    let query = params.to_query()?;
    let docs = db_services::list_documents(state.repository.as_ref(), kind).await?;
    Ok(Json(documents::list_documents(docs, &query)))
}

/// GET /api/estimates
pub async fn list_estimates(
    State(state): State<AppState>,
    Query(params): Query<DocumentParams>,
) -> HandlerResult<DocumentListData> {
    document_listing(&state, DocumentKind::Estimate, &params).await
}

/// GET /api/invoices
pub async fn list_invoices(
    State(state): State<AppState>,
    Query(params): Query<DocumentParams>,
) -> HandlerResult<DocumentListData> {
    document_listing(&state, DocumentKind::Invoice, &params).await
}

// =============================================================================
// Dashboards
// =============================================================================

/// GET /api/dashboard/summary
///
/// Business-wide counters; staff only.
pub async fn dashboard_summary(
    State(state): State<AppState>,
    Session(session): Session,
    Query(params): Query<TodayParams>,
) -> HandlerResult<DashboardSummary> {
    if !session.role().is_some_and(|r| r.is_staff()) {
        return Err(AppError::Forbidden(
            "Only staff can view the business summary".to_string(),
        ));
    }
    let today = state.today(params.today()?);
    let data = dashboard::load_dashboard_data(state.repository.as_ref()).await?;
    Ok(Json(dashboard::compute_summary(&data, today)))
}

/// GET /api/dashboard
///
/// The dashboard variant for the session's role.
pub async fn get_dashboard(
    State(state): State<AppState>,
    Session(session): Session,
    Query(params): Query<TodayParams>,
) -> HandlerResult<DashboardView> {
    let today = state.today(params.today()?);
    let data = dashboard::load_dashboard_data(state.repository.as_ref()).await?;
    dashboard::build_dashboard(&session, &data, today)
        .map(Json)
        .ok_or_else(|| AppError::Unauthorized("No signed-in user".to_string()))
}

// =============================================================================
// Schedule hub
// =============================================================================

/// GET /api/schedule
pub async fn schedule_list(
    State(state): State<AppState>,
    Session(session): Session,
    Query(params): Query<ScheduleParams>,
) -> HandlerResult<ScheduleListData> {
    require_schedule_access(&session)?;
    let query = params.to_query()?;
    let today = state.today(params.today()?);

    let snapshot = schedule_hub::load_snapshot(state.repository.as_ref()).await?;
    Ok(Json(schedule_hub::list_view(&snapshot, &query, today)))
}

/// GET /api/schedule/calendar
pub async fn schedule_calendar(
    State(state): State<AppState>,
    Session(session): Session,
    Query(params): Query<CalendarParams>,
) -> HandlerResult<CalendarMonth> {
    require_schedule_access(&session)?;
    let filter = params.schedule.to_filter()?;
    let today = state.today(params.schedule.today()?);
    let cursor = params.cursor(today)?;

    let snapshot = schedule_hub::load_snapshot(state.repository.as_ref()).await?;
    Ok(Json(schedule_hub::calendar_view(
        &snapshot, &filter, cursor, today,
    )?))
}

/// GET /api/schedule/board
pub async fn schedule_board(
    State(state): State<AppState>,
    Session(session): Session,
    Query(params): Query<ScheduleParams>,
) -> HandlerResult<BoardData> {
    require_schedule_access(&session)?;
    let query = params.to_query()?;
    let today = state.today(params.today()?);

    let snapshot = schedule_hub::load_snapshot(state.repository.as_ref()).await?;
    Ok(Json(schedule_hub::board_view(&snapshot, &query, today)))
}

fn require_route_access(session: &SessionContext, technician: &str) -> Result<(), AppError> {
    if session.can_view_route(technician) {
        Ok(())
    } else {
        Err(AppError::Forbidden(format!(
            "Not allowed to view the route of {}",
            technician
        )))
    }
}

/// GET /api/schedule/routes
pub async fn schedule_route(
    State(state): State<AppState>,
    Session(session): Session,
    Query(params): Query<RouteParams>,
) -> HandlerResult<RoutePlan> {
    let technician = params.technician()?;
    require_route_access(&session, technician)?;
    let date = match params.date()? {
        Some(date) => date,
        None => state.today(params.today()?),
    };

    let snapshot = schedule_hub::load_snapshot(state.repository.as_ref()).await?;
    Ok(Json(schedule_hub::route_view(
        &snapshot,
        technician,
        date,
        params.optimize.unwrap_or(false),
    )))
}

/// POST /api/schedule/routes/reorder
///
/// Stateless: the client sends its current order and one action, and gets
/// the resulting route back. Nothing is persisted.
pub async fn reorder_route(
    State(state): State<AppState>,
    Session(session): Session,
    Json(request): Json<RouteReorderRequest>,
) -> HandlerResult<RoutePlan> {
    require_route_access(&session, &request.technician)?;

    let snapshot = schedule_hub::load_snapshot(state.repository.as_ref()).await?;
    let mut plan = RoutePlan::build(&snapshot.items, &request.technician, request.date);
    if !request.order.is_empty() {
        plan.apply_order(&request.order)?;
    }
    plan.apply(&request.action)?;
    Ok(Json(plan))
}
