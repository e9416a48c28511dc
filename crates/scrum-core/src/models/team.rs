use serde::{Deserialize, Serialize};

/// A group of users associated with a project. `member_ids` is a set with
/// insertion order: duplicate adds and absent removes are no-ops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub project_id: i64,
    #[serde(default)]
    pub member_ids: Vec<i64>,
}

impl Team {
    pub fn add_member(&mut self, user_id: i64) {
        if !self.member_ids.contains(&user_id) {
            self.member_ids.push(user_id);
        }
    }

    pub fn remove_member(&mut self, user_id: i64) {
        self.member_ids.retain(|id| *id != user_id);
    }

    pub fn has_member(&self, user_id: i64) -> bool {
        self.member_ids.contains(&user_id)
    }
}
