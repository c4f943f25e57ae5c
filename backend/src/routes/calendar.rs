use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::schedule::ScheduleItem;

// =========================================================
// Calendar types
// =========================================================

/// One cell of the month grid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub day: u32,
    /// False for the padding days borrowed from adjacent months.
    pub in_month: bool,
    pub is_today: bool,
    pub item_count: usize,
}

/// Year/month pair used for navigation links.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthRef {
    pub year: i32,
    pub month: u32,
}

/// Month grid with an optional day detail panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
    /// e.g. "October 2026"
    pub label: String,
    /// Sunday-first weeks, seven days each.
    pub weeks: Vec<Vec<CalendarDay>>,
    pub previous: MonthRef,
    pub next: MonthRef,
    /// Items scheduled inside the month (padding days excluded).
    pub month_item_count: usize,
    pub selected_date: Option<NaiveDate>,
    pub selected_items: Vec<ScheduleItem>,
}

/// Route path for the calendar view
pub const CALENDAR_PATH: &str = "/schedule/calendar";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_day_serializes_camel_case() {
        let day = CalendarDay {
            date: NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
            day: 1,
            in_month: true,
            is_today: false,
            item_count: 2,
        };
        let value = serde_json::to_value(&day).unwrap();
        assert_eq!(value["inMonth"], true);
        assert_eq!(value["itemCount"], 2);
        assert_eq!(value["date"], "2026-10-01");
    }

    #[test]
    fn test_const_value() {
        assert_eq!(CALENDAR_PATH, "/schedule/calendar");
    }
}
