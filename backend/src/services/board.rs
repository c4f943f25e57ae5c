//! Kanban board: one column per status.

use crate::api::{BoardColumn, BoardData, ItemStatus, ScheduleItem};

/// Group items into status columns in canonical order.
///
/// Every status gets a column, even an empty one; items keep the order they
/// arrive in (i.e. the pipeline's sort order).
pub fn build_board(items: &[ScheduleItem]) -> BoardData {
    let columns = ItemStatus::ALL
        .iter()
        .map(|status| BoardColumn {
            status: *status,
            label: status.label().to_string(),
            items: items
                .iter()
                .filter(|item| item.status == *status)
                .cloned()
                .collect(),
        })
        .collect();

    BoardData {
        columns,
        total_count: items.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ScheduleItemType;

    fn item(id: i64, status: ItemStatus) -> ScheduleItem {
        ScheduleItem {
            id,
            title: format!("Item {}", id),
            item_type: ScheduleItemType::WorkOrder,
            category: None,
            status,
            priority: None,
            technician_name: None,
            client_name: None,
            scheduled_date: None,
            scheduled_time: None,
            address: None,
            estimated_duration: None,
        }
    }

    #[test]
    fn test_empty_board_has_all_columns() {
        let board = build_board(&[]);
        assert_eq!(board.columns.len(), ItemStatus::ALL.len());
        assert!(board.columns.iter().all(|c| c.items.is_empty()));
        assert_eq!(board.columns[2].label, "In Progress");
    }

    #[test]
    fn test_items_land_in_their_column_in_order() {
        let items = vec![
            item(1, ItemStatus::Completed),
            item(2, ItemStatus::Pending),
            item(3, ItemStatus::Completed),
        ];
        let board = build_board(&items);
        let completed = board
            .columns
            .iter()
            .find(|c| c.status == ItemStatus::Completed)
            .unwrap();
        assert_eq!(
            completed.items.iter().map(|i| i.id).collect::<Vec<_>>(),
            vec![1, 3]
        );
        assert_eq!(board.columns[0].status, ItemStatus::Pending);
        assert_eq!(board.total_count, 3);
        let placed: usize = board.columns.iter().map(|c| c.items.len()).sum();
        assert_eq!(placed, 3);
    }
}
