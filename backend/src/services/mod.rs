//! Schedule hub view-model services.
//!
//! Everything here is a pure function over records already fetched, except
//! the snapshot loaders in `schedule_hub` and `dashboard` which read from a
//! repository.

pub mod aggregator;
pub mod board;
pub mod calendar;
pub mod dashboard;
pub mod documents;
pub mod filter;
pub mod route_planner;
pub mod schedule_hub;
pub mod sorting;
pub mod validation;

pub use aggregator::aggregate;
pub use board::build_board;
pub use calendar::{build_month, CalendarCursor, CalendarError};
pub use dashboard::{build_dashboard, compute_summary, load_dashboard_data, DashboardData};
pub use documents::{list_documents, DocumentQuery};
pub use filter::{DateRange, ScheduleFilter};
pub use route_planner::RouteError;
pub use schedule_hub::{load_snapshot, HubSnapshot, ScheduleQuery};
pub use sorting::{DocumentSortField, ScheduleSortField, SortDirection};
pub use validation::{validate_new_work_order, ValidationErrors};
