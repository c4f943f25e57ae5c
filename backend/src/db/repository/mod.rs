//! Repository traits for the pool hub data source.
//!
//! The traits are split by concern and combined into [`FullRepository`],
//! which is what the HTTP state and the service layer hold.

pub mod billing;
pub mod error;
pub mod schedule;

pub use billing::BillingRepository;
pub use error::{ErrorContext, RepositoryError, RepositoryResult};
pub use schedule::ScheduleRepository;

/// Every capability a backing store must offer.
pub trait FullRepository: ScheduleRepository + BillingRepository {}

impl<T> FullRepository for T where T: ScheduleRepository + BillingRepository {}
