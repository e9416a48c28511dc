use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A project is the top-level organizational container. Archiving is a
/// one-way transition; there is no unarchive operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub expected_end_date: NaiveDate,
    #[serde(default)]
    pub archived: bool,
}

impl Project {
    pub fn is_archived(&self) -> bool {
        self.archived
    }
}
