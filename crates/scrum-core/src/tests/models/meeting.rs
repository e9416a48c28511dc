use crate::{Meeting, MeetingType};

use chrono::NaiveDate;

fn meeting() -> Meeting {
    Meeting {
        id: 1,
        title: "Sprint Planning".to_string(),
        meeting_type: MeetingType::SprintPlanning,
        date: NaiveDate::from_ymd_opt(2025, 1, 6)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap(),
        duration: 120,
        team_id: 1,
        attendee_ids: vec![2, 3, 4],
        notes: None,
    }
}

#[test]
fn test_attendee_set_semantics() {
    let mut meeting = meeting();
    meeting.add_attendee(3);
    assert_eq!(meeting.attendee_ids, vec![2, 3, 4]);

    meeting.add_attendee(5);
    assert_eq!(meeting.attendee_ids, vec![2, 3, 4, 5]);

    meeting.remove_attendee(99);
    assert_eq!(meeting.attendee_ids, vec![2, 3, 4, 5]);

    meeting.remove_attendee(2);
    assert_eq!(meeting.attendee_ids, vec![3, 4, 5]);
}

#[test]
fn test_meeting_serde_type_field() {
    let json = serde_json::to_value(meeting()).unwrap();
    assert_eq!(json["type"], "Sprint Planning");
    assert_eq!(json["date"], "2025-01-06T09:00:00");

    let back: Meeting = serde_json::from_value(json).unwrap();
    assert_eq!(back, meeting());
}
