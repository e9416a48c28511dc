use crate::ItemStatus;

use serde::{Deserialize, Serialize};

/// A sub-unit of a backlog item. `assigned_to_id` must reference a user
/// holding the Developer role; the backend enforces this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub description: String,
    pub points: u32,
    pub status: ItemStatus,
    pub item_backlog_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to_id: Option<i64>,
}
