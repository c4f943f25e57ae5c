//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;
use crate::routes::{board, calendar, dashboard, documents, records, route_plan, schedule};

/// Prefix every API route is mounted under.
pub const API_PREFIX: &str = "/api";

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Records
        .route(
            records::WORK_ORDERS_PATH,
            get(handlers::list_work_orders).post(handlers::create_work_order),
        )
        .route(records::WORK_ORDER_PATH, get(handlers::get_work_order))
        .route(
            records::MAINTENANCE_ORDERS_PATH,
            get(handlers::list_maintenance_orders),
        )
        .route(records::TECHNICIANS_PATH, get(handlers::list_technicians))
        .route(records::CLIENTS_PATH, get(handlers::list_clients))
        // Billing
        .route(documents::ESTIMATES_PATH, get(handlers::list_estimates))
        .route(documents::INVOICES_PATH, get(handlers::list_invoices))
        // Dashboards
        .route(
            dashboard::DASHBOARD_SUMMARY_PATH,
            get(handlers::dashboard_summary),
        )
        .route(dashboard::DASHBOARD_PATH, get(handlers::get_dashboard))
        // Schedule hub
        .route(schedule::SCHEDULE_PATH, get(handlers::schedule_list))
        .route(calendar::CALENDAR_PATH, get(handlers::schedule_calendar))
        .route(board::BOARD_PATH, get(handlers::schedule_board))
        .route(route_plan::ROUTES_PATH, get(handlers::schedule_route))
        .route(
            route_plan::ROUTES_REORDER_PATH,
            post(handlers::reorder_route),
        );

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest(API_PREFIX, api)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(CompressionLayer::new())
                .layer(DefaultBodyLimit::max(1024 * 1024)),
        )
        .with_state(state)
}
