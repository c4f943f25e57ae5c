//! Per-technician, per-date stop lists with manual sequencing.
//!
//! "Optimize" here is an alphabetical sort by address. It is a placeholder for
//! real routing and does not look at geography.

use chrono::NaiveDate;
use std::collections::HashMap;

use super::sorting::{compare_present, SortDirection};
use crate::api::{RouteAction, RoutePlan, ScheduleItem, ScheduleKey};
use crate::models::same_technician;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("Stop index {index} is out of range for a route of {len} stops")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("{0:?} is not a stop on this route")]
    UnknownStop(ScheduleKey),
    #[error("{0:?} appears more than once in the requested order")]
    DuplicateStop(ScheduleKey),
}

impl RoutePlan {
    /// Stops for `technician` on `date`, ordered by scheduled time (untimed last).
    ///
    /// The plan carries the technician name as spelled on the stops.
    pub fn build(items: &[ScheduleItem], technician: &str, date: NaiveDate) -> Self {
        let mut stops: Vec<ScheduleItem> = items
            .iter()
            .filter(|item| {
                item.scheduled_date == Some(date)
                    && same_technician(item.technician_name.as_deref(), technician)
            })
            .cloned()
            .collect();
        stops.sort_by(|a, b| {
            compare_present(
                a.scheduled_time.as_deref(),
                b.scheduled_time.as_deref(),
                SortDirection::Asc,
            )
        });

        let technician = stops
            .first()
            .and_then(|stop| stop.technician_name.clone())
            .unwrap_or_else(|| technician.trim().to_string());

        let mut plan = Self {
            technician,
            date,
            stops,
            total_estimated_minutes: 0,
        };
        plan.refresh_totals();
        plan
    }

    fn refresh_totals(&mut self) {
        self.total_estimated_minutes = self
            .stops
            .iter()
            .filter_map(|s| s.estimated_duration)
            .sum();
    }

    fn check_index(&self, index: usize) -> Result<(), RouteError> {
        if index >= self.stops.len() {
            return Err(RouteError::IndexOutOfRange {
                index,
                len: self.stops.len(),
            });
        }
        Ok(())
    }

    /// Swap the stop at `index` with the one before it. Returns whether anything moved.
    pub fn move_up(&mut self, index: usize) -> Result<bool, RouteError> {
        self.check_index(index)?;
        if index == 0 {
            return Ok(false);
        }
        self.stops.swap(index - 1, index);
        Ok(true)
    }

    /// Swap the stop at `index` with the one after it. Returns whether anything moved.
    pub fn move_down(&mut self, index: usize) -> Result<bool, RouteError> {
        self.check_index(index)?;
        if index + 1 == self.stops.len() {
            return Ok(false);
        }
        self.stops.swap(index, index + 1);
        Ok(true)
    }

    /// Stable, case-insensitive sort by address; stops without one go last.
    pub fn optimize(&mut self) {
        self.stops.sort_by(|a, b| {
            compare_present(
                a.address.as_deref().map(str::to_lowercase),
                b.address.as_deref().map(str::to_lowercase),
                SortDirection::Asc,
            )
        });
    }

    /// Reorder stops to follow `order`. Stops not named keep their relative
    /// order after the named ones.
    pub fn apply_order(&mut self, order: &[ScheduleKey]) -> Result<(), RouteError> {
        let mut rank: HashMap<ScheduleKey, usize> = HashMap::with_capacity(order.len());
        for (position, key) in order.iter().enumerate() {
            if rank.insert(*key, position).is_some() {
                return Err(RouteError::DuplicateStop(*key));
            }
        }
        if let Some(unknown) = order
            .iter()
            .find(|key| !self.stops.iter().any(|s| s.key() == **key))
        {
            return Err(RouteError::UnknownStop(*unknown));
        }
        self.stops
            .sort_by_key(|stop| rank.get(&stop.key()).copied().unwrap_or(usize::MAX));
        Ok(())
    }

    /// Apply a sequencing action from the route view.
    pub fn apply(&mut self, action: &RouteAction) -> Result<bool, RouteError> {
        match action {
            RouteAction::MoveUp { index } => self.move_up(*index),
            RouteAction::MoveDown { index } => self.move_down(*index),
            RouteAction::Optimize => {
                self.optimize();
                Ok(true)
            }
        }
    }

    pub fn keys(&self) -> Vec<ScheduleKey> {
        self.stops.iter().map(ScheduleItem::key).collect()
    }
}

#[cfg(test)]
#[path = "route_planner_tests.rs"]
mod route_planner_tests;
