use crate::MeetingType;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// `attendee_ids` is a set with insertion order, same semantics as team
/// membership. The wire format for `date` carries no UTC offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    pub id: i64,
    pub title: String,
    #[serde(rename = "type")]
    pub meeting_type: MeetingType,
    pub date: NaiveDateTime,
    /// Duration in minutes, positive.
    pub duration: u32,
    pub team_id: i64,
    #[serde(default)]
    pub attendee_ids: Vec<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Meeting {
    pub fn add_attendee(&mut self, user_id: i64) {
        if !self.attendee_ids.contains(&user_id) {
            self.attendee_ids.push(user_id);
        }
    }

    pub fn remove_attendee(&mut self, user_id: i64) {
        self.attendee_ids.retain(|id| *id != user_id);
    }
}
