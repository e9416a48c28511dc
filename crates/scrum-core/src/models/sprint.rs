use crate::SprintStatus;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A time-boxed iteration associated with one project.
///
/// `team_id` is optional on the client side: the backend derives the team
/// transitively from the project, but the API accepts an explicit value.
/// An explicit value wins over the project-derived one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sprint {
    pub id: i64,
    pub name: String,
    pub goal: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: SprintStatus,
    pub project_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<i64>,
}
