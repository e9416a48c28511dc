use crate::{Comment, ItemStatus};

use serde::{Deserialize, Serialize};

/// A unit of product work, optionally slotted into a sprint and assigned
/// to a user. Priority 1 is the highest urgency by convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BacklogItem {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub priority: u32,
    /// Estimation in hours.
    pub estimation: u32,
    pub status: ItemStatus,
    pub project_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprint_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to_id: Option<i64>,
    /// Oldest first, append-only. Defaults to empty when the backend
    /// response omits the field.
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl BacklogItem {
    pub fn push_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }
}
