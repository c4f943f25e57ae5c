//! Data access for the pool hub.
//!
//! ```text
//! HTTP handlers / schedule hub
//!            │
//!   services.rs (intake validation, pass-throughs)
//!            │
//!   repository/ (ScheduleRepository + BillingRepository)
//!            │
//!     ┌──────┴───────┐
//!   local          remote
//! (in-memory)   (upstream REST API)
//! ```
//!
//! Repositories are built by [`RepositoryFactory`] from `repository.toml`
//! or the environment and shared as `Arc<dyn FullRepository>`.

#[cfg(not(any(feature = "local-repo", feature = "remote-repo")))]
compile_error!("Enable at least one repository backend feature.");

pub mod factory;
pub mod repo_config;
pub mod repositories;
pub mod repository;
pub mod services;

#[cfg(test)]
#[path = "services_tests.rs"]
mod services_tests;

pub use factory::{RepositoryFactory, RepositoryType};
pub use repo_config::RepositoryConfig;
pub use repositories::LocalRepository;
#[cfg(feature = "remote-repo")]
pub use repositories::{RemoteConfig, RemoteRepository};
pub use repository::{
    BillingRepository, ErrorContext, FullRepository, RepositoryError, RepositoryResult,
    ScheduleRepository,
};
pub use services::CreateWorkOrderError;
