pub mod board;
pub mod calendar;
pub mod dashboard;
pub mod documents;
pub mod records;
pub mod route_plan;
pub mod schedule;

#[cfg(test)]
mod tests {
    #[test]
    fn test_route_paths_are_unique() {
        let paths = [
            super::schedule::SCHEDULE_PATH,
            super::calendar::CALENDAR_PATH,
            super::board::BOARD_PATH,
            super::route_plan::ROUTES_PATH,
            super::route_plan::ROUTES_REORDER_PATH,
            super::dashboard::DASHBOARD_PATH,
            super::dashboard::DASHBOARD_SUMMARY_PATH,
            super::documents::ESTIMATES_PATH,
            super::documents::INVOICES_PATH,
            super::records::WORK_ORDERS_PATH,
            super::records::WORK_ORDER_PATH,
            super::records::MAINTENANCE_ORDERS_PATH,
            super::records::TECHNICIANS_PATH,
            super::records::CLIENTS_PATH,
        ];
        let unique: std::collections::HashSet<_> = paths.iter().collect();
        assert_eq!(unique.len(), paths.len());
        assert!(paths.iter().all(|p| p.starts_with('/')));
    }
}
