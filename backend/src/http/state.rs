//! Application state for the HTTP server.

use chrono::NaiveDate;
use std::sync::Arc;

use crate::db::FullRepository;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository every handler reads through
    pub repository: Arc<dyn FullRepository>,
    /// Fixed "today" for deterministic runs; `None` uses the local clock.
    pub today_override: Option<NaiveDate>,
}

impl AppState {
    /// Create a new application state with the given repository.
    pub fn new(repository: Arc<dyn FullRepository>) -> Self {
        Self {
            repository,
            today_override: None,
        }
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today_override = Some(today);
        self
    }

    /// Today's date, honoring a per-request override first.
    pub fn today(&self, requested: Option<NaiveDate>) -> NaiveDate {
        requested
            .or(self.today_override)
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}
