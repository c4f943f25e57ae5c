//! # Pool Hub Backend
//!
//! Scheduling back office for a pool service company.
//!
//! Work orders (one-off jobs) and maintenance orders (recurring service) are
//! merged into a single schedule that can be filtered, sorted and shown as a
//! list, a month calendar, a status board, or per-technician routes. Role
//! dashboards and billing document listings sit alongside.
//!
//! ## Architecture
//!
//! - [`api`]: identifier newtypes and the DTOs served over HTTP
//! - [`models`]: source records, roles and sessions, seed loading
//! - [`db`]: repository traits, local/remote backends, factory, config
//! - [`services`]: the schedule pipeline, views and dashboards
//! - [`routes`]: per-view payload types and route paths
//! - [`http`]: axum server, handlers and error mapping

// RepositoryError carries a structured context; keep it unboxed.
#![allow(clippy::result_large_err)]

pub mod api;

pub mod db;
pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
