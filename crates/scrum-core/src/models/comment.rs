use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable once created: no edit or delete operation exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    pub text: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}
