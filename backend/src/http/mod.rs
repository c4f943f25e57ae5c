//! HTTP server module for the pool hub backend.
//!
//! An axum server exposing the schedule hub, dashboards and records as a
//! JSON API.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Session extraction from x-user-* headers               │
//! │  - Query parsing into filters and sort keys               │
//! │  - CORS, compression, error mapping                       │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services/, db/services.rs)                │
//! │  - Aggregation, filter/sort, calendar, board, routes      │
//! │  - Dashboards, intake validation                          │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Repository Layer (db/)                                   │
//! │  - LocalRepository / RemoteRepository                     │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod session;
pub mod state;

pub use error::{ApiError, AppError};
pub use router::create_router;
pub use session::Session;
pub use state::AppState;
