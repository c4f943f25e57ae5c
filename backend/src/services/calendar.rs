//! Month grid for the calendar view.

use chrono::{Datelike, Days, Months, NaiveDate};
use std::collections::BTreeMap;

use crate::api::{CalendarDay, CalendarMonth, ScheduleItem};
use crate::routes::calendar::MonthRef;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Invalid month {0}; expected 1-12")]
    InvalidMonth(u32),
    #[error("Year {0} is out of range")]
    InvalidYear(i32),
}

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Navigation state of the calendar view: shown month plus selected day.
///
/// Moving between months never refetches; the grid is rebuilt from the items
/// already in hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCursor {
    pub year: i32,
    pub month: u32,
    pub selected: Option<NaiveDate>,
}

impl CalendarCursor {
    pub fn new(year: i32, month: u32) -> Result<Self, CalendarError> {
        first_of_month(year, month)?;
        Ok(Self {
            year,
            month,
            selected: None,
        })
    }

    pub fn containing(day: NaiveDate) -> Self {
        Self {
            year: day.year(),
            month: day.month(),
            selected: None,
        }
    }

    pub fn previous(&self) -> Self {
        let (year, month) = shift_month(self.year, self.month, -1);
        Self {
            year,
            month,
            selected: None,
        }
    }

    pub fn next(&self) -> Self {
        let (year, month) = shift_month(self.year, self.month, 1);
        Self {
            year,
            month,
            selected: None,
        }
    }

    /// Clicking a day opens its detail panel; clicking it again closes it.
    pub fn toggle_day(&mut self, day: NaiveDate) {
        self.selected = match self.selected {
            Some(current) if current == day => None,
            _ => Some(day),
        };
    }
}

fn shift_month(year: i32, month: u32, delta: i32) -> (i32, u32) {
    let zero_based = year * 12 + month as i32 - 1 + delta;
    (zero_based.div_euclid(12), zero_based.rem_euclid(12) as u32 + 1)
}

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth(month));
    }
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(CalendarError::InvalidYear(year))
}

/// Bucket items by ISO date (`YYYY-MM-DD`). Undated items are skipped.
pub fn bucket_by_date(items: &[ScheduleItem]) -> BTreeMap<String, Vec<&ScheduleItem>> {
    let mut buckets: BTreeMap<String, Vec<&ScheduleItem>> = BTreeMap::new();
    for item in items {
        if let Some(date) = item.scheduled_date {
            buckets
                .entry(date.format("%Y-%m-%d").to_string())
                .or_default()
                .push(item);
        }
    }
    buckets
}

/// Build the Sunday-first month grid for `cursor` over `items`.
pub fn build_month(
    cursor: CalendarCursor,
    items: &[ScheduleItem],
    today: NaiveDate,
) -> Result<CalendarMonth, CalendarError> {
    let first = first_of_month(cursor.year, cursor.month)?;
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|d| d.pred_opt())
        .ok_or(CalendarError::InvalidYear(cursor.year))?;

    let lead = u64::from(first.weekday().num_days_from_sunday());
    let trail = 6 - u64::from(last.weekday().num_days_from_sunday());
    let grid_start = first
        .checked_sub_days(Days::new(lead))
        .ok_or(CalendarError::InvalidYear(cursor.year))?;
    let grid_end = last
        .checked_add_days(Days::new(trail))
        .ok_or(CalendarError::InvalidYear(cursor.year))?;

    let buckets = bucket_by_date(items);
    let count_on = |date: NaiveDate| {
        buckets
            .get(&date.format("%Y-%m-%d").to_string())
            .map_or(0, Vec::len)
    };

    let days: Vec<CalendarDay> = grid_start
        .iter_days()
        .take_while(|d| *d <= grid_end)
        .map(|date| CalendarDay {
            date,
            day: date.day(),
            in_month: date.month() == cursor.month && date.year() == cursor.year,
            is_today: date == today,
            item_count: count_on(date),
        })
        .collect();
    let weeks: Vec<Vec<CalendarDay>> = days.chunks(7).map(<[CalendarDay]>::to_vec).collect();

    let month_item_count = days
        .iter()
        .filter(|d| d.in_month)
        .map(|d| d.item_count)
        .sum();

    let selected_items = cursor
        .selected
        .map(|day| {
            items
                .iter()
                .filter(|item| item.scheduled_date == Some(day))
                .cloned()
                .collect()
        })
        .unwrap_or_default();

    let previous = cursor.previous();
    let next = cursor.next();

    Ok(CalendarMonth {
        year: cursor.year,
        month: cursor.month,
        label: format!("{} {}", MONTH_NAMES[cursor.month as usize - 1], cursor.year),
        weeks,
        previous: MonthRef {
            year: previous.year,
            month: previous.month,
        },
        next: MonthRef {
            year: next.year,
            month: next.month,
        },
        month_item_count,
        selected_date: cursor.selected,
        selected_items,
    })
}

#[cfg(test)]
#[path = "calendar_tests.rs"]
mod calendar_tests;
