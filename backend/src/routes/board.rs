use serde::{Deserialize, Serialize};

use super::schedule::{ItemStatus, ScheduleItem};

// =========================================================
// Board (kanban) types
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardColumn {
    pub status: ItemStatus,
    pub label: String,
    pub items: Vec<ScheduleItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardData {
    pub columns: Vec<BoardColumn>,
    pub total_count: usize,
}

/// Route path for the board view
pub const BOARD_PATH: &str = "/schedule/board";
