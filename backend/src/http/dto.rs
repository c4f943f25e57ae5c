//! Data Transfer Objects for the HTTP API.
//!
//! Query strings arrive as plain strings and are converted into service
//! types here, so a bad value becomes a 400 naming the parameter. The
//! response payloads themselves live in `routes`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::AppError;
use crate::api::{DocumentStatus, ItemStatus, ScheduleItemType};
use crate::services::{
    CalendarCursor, DateRange, DocumentQuery, DocumentSortField, ScheduleFilter, ScheduleQuery,
    ScheduleSortField, SortDirection,
};

pub use crate::routes::route_plan::RouteReorderRequest;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// "connected", "disconnected" or "error: ..."
    pub repository: String,
}

/// Value of an optional query parameter, with "" and "all" meaning unset.
fn param(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("all"))
}

fn parse_param<T: FromStr>(name: &str, value: Option<&str>) -> Result<Option<T>, AppError> {
    param(value)
        .map(|v| {
            v.parse::<T>()
                .map_err(|_| AppError::BadRequest(format!("Invalid value '{}' for '{}'", v, name)))
        })
        .transpose()
}

fn parse_date(name: &str, value: Option<&str>) -> Result<Option<NaiveDate>, AppError> {
    param(value)
        .map(|v| {
            NaiveDate::parse_from_str(v, "%Y-%m-%d").map_err(|_| {
                AppError::BadRequest(format!("Invalid date '{}' for '{}', expected YYYY-MM-DD", v, name))
            })
        })
        .transpose()
}

/// Query parameters shared by the list, calendar and board views.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleParams {
    #[serde(rename = "type", default)]
    pub item_type: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub technician: Option<String>,
    #[serde(default)]
    pub date_range: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub sort_dir: Option<String>,
    /// ISO date overriding the wall clock.
    #[serde(default)]
    pub today: Option<String>,
}

impl ScheduleParams {
    pub fn to_filter(&self) -> Result<ScheduleFilter, AppError> {
        Ok(ScheduleFilter {
            item_type: parse_param::<ScheduleItemType>("type", self.item_type.as_deref())?,
            category: param(self.category.as_deref()).map(str::to_string),
            status: parse_param::<ItemStatus>("status", self.status.as_deref())?,
            technician: param(self.technician.as_deref()).map(str::to_string),
            date_range: parse_param::<DateRange>("dateRange", self.date_range.as_deref())?
                .unwrap_or_default(),
            search: param(self.search.as_deref()).map(str::to_string),
        })
    }

    pub fn to_query(&self) -> Result<ScheduleQuery, AppError> {
        Ok(ScheduleQuery {
            filter: self.to_filter()?,
            sort_by: parse_param::<ScheduleSortField>("sortBy", self.sort_by.as_deref())?
                .unwrap_or_default(),
            direction: parse_param::<SortDirection>("sortDir", self.sort_dir.as_deref())?
                .unwrap_or_default(),
        })
    }

    pub fn today(&self) -> Result<Option<NaiveDate>, AppError> {
        parse_date("today", self.today.as_deref())
    }
}

/// Calendar view: schedule filters plus the month to show.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalendarParams {
    #[serde(flatten)]
    pub schedule: ScheduleParams,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub month: Option<String>,
    /// Day whose items are listed under the grid.
    #[serde(default)]
    pub selected: Option<String>,
}

impl CalendarParams {
    /// Month from `year`/`month`, defaulting to the month containing `today`.
    pub fn cursor(&self, today: NaiveDate) -> Result<CalendarCursor, AppError> {
        let fallback = CalendarCursor::containing(today);
        let year = parse_param::<i32>("year", self.year.as_deref())?.unwrap_or(fallback.year);
        let month = parse_param::<u32>("month", self.month.as_deref())?.unwrap_or(fallback.month);
        let mut cursor = CalendarCursor::new(year, month)?;
        cursor.selected = parse_date("selected", self.selected.as_deref())?;
        Ok(cursor)
    }
}

/// Route view query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteParams {
    #[serde(default)]
    pub technician: Option<String>,
    /// Defaults to today.
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub optimize: Option<bool>,
    #[serde(default)]
    pub today: Option<String>,
}

impl RouteParams {
    pub fn technician(&self) -> Result<&str, AppError> {
        param(self.technician.as_deref())
            .ok_or_else(|| AppError::BadRequest("Query parameter 'technician' is required".into()))
    }

    pub fn date(&self) -> Result<Option<NaiveDate>, AppError> {
        parse_date("date", self.date.as_deref())
    }

    pub fn today(&self) -> Result<Option<NaiveDate>, AppError> {
        parse_date("today", self.today.as_deref())
    }
}

/// Endpoints that only need a date override.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TodayParams {
    #[serde(default)]
    pub today: Option<String>,
}

impl TodayParams {
    pub fn today(&self) -> Result<Option<NaiveDate>, AppError> {
        parse_date("today", self.today.as_deref())
    }
}

/// Estimate/invoice listing query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentParams {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub sort_dir: Option<String>,
}

impl DocumentParams {
    pub fn to_query(&self) -> Result<DocumentQuery, AppError> {
        Ok(DocumentQuery {
            status: parse_param::<DocumentStatus>("status", self.status.as_deref())?,
            search: param(self.search.as_deref()).map(str::to_string),
            sort_by: parse_param::<DocumentSortField>("sortBy", self.sort_by.as_deref())?
                .unwrap_or_default(),
            direction: parse_param::<SortDirection>("sortDir", self.sort_dir.as_deref())?
                .unwrap_or_default(),
        })
    }
}
