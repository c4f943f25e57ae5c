//! Filter stage of the schedule pipeline.
//!
//! Each criterion narrows the list in turn; `None` (the "all" choice) leaves
//! the list untouched.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::api::{ItemStatus, ScheduleItem, ScheduleItemType};

/// Date bucket evaluated against a caller-supplied "today".
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, Default,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DateRange {
    #[default]
    All,
    Today,
    ThisWeek,
    ThisMonth,
}

impl DateRange {
    /// Whether `date` falls in this bucket. Undated items only match `All`.
    pub fn matches(&self, date: Option<NaiveDate>, today: NaiveDate) -> bool {
        let date = match (self, date) {
            (DateRange::All, _) => return true,
            (_, None) => return false,
            (_, Some(date)) => date,
        };
        match self {
            DateRange::All => true,
            DateRange::Today => date == today,
            DateRange::ThisWeek => {
                let (start, end) = week_bounds(today);
                start <= date && date <= end
            }
            DateRange::ThisMonth => date.year() == today.year() && date.month() == today.month(),
        }
    }
}

/// Sunday..=Saturday week containing `day`.
pub fn week_bounds(day: NaiveDate) -> (NaiveDate, NaiveDate) {
    let offset = u64::from(day.weekday().num_days_from_sunday());
    let start = day.checked_sub_days(Days::new(offset)).unwrap_or(day);
    let end = start.checked_add_days(Days::new(6)).unwrap_or(start);
    (start, end)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleFilter {
    pub item_type: Option<ScheduleItemType>,
    pub category: Option<String>,
    pub status: Option<ItemStatus>,
    pub technician: Option<String>,
    pub date_range: DateRange,
    /// Case-insensitive substring over title, technician and client.
    pub search: Option<String>,
}

impl ScheduleFilter {
    pub fn is_identity(&self) -> bool {
        *self == ScheduleFilter::default()
    }

    pub fn matches(&self, item: &ScheduleItem, today: NaiveDate) -> bool {
        if let Some(item_type) = self.item_type {
            if item.item_type != item_type {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if item.category.as_deref() != Some(category.as_str()) {
                return false;
            }
        }
        if let Some(status) = self.status {
            if item.status != status {
                return false;
            }
        }
        if let Some(technician) = &self.technician {
            if item.technician_name.as_deref() != Some(technician.as_str()) {
                return false;
            }
        }
        if !self.date_range.matches(item.scheduled_date, today) {
            return false;
        }
        match &self.search {
            Some(needle) => matches_search(item, needle),
            None => true,
        }
    }

    /// Keep the items that pass every criterion, preserving order.
    pub fn apply(&self, items: Vec<ScheduleItem>, today: NaiveDate) -> Vec<ScheduleItem> {
        if self.is_identity() {
            return items;
        }
        items
            .into_iter()
            .filter(|item| self.matches(item, today))
            .collect()
    }
}

fn matches_search(item: &ScheduleItem, needle: &str) -> bool {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    let contains = |field: Option<&str>| {
        field
            .map(|value| value.to_lowercase().contains(&needle))
            .unwrap_or(false)
    };
    contains(Some(item.title.as_str()))
        || contains(item.technician_name.as_deref())
        || contains(item.client_name.as_deref())
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod filter_tests;
