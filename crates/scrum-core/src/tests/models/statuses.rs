use crate::{ItemStatus, MeetingType, Role, SprintStatus};

use std::str::FromStr;

#[test]
fn test_sprint_status_round_trip() {
    for status in [
        SprintStatus::Planned,
        SprintStatus::Active,
        SprintStatus::Concluded,
    ] {
        assert_eq!(SprintStatus::from_str(status.as_str()).unwrap(), status);
    }
}

#[test]
fn test_sprint_status_rejects_unknown() {
    assert!(SprintStatus::from_str("Cancelled").is_err());
}

#[test]
fn test_item_status_serde_uses_variant_names() {
    assert_eq!(
        serde_json::to_string(&ItemStatus::InProgress).unwrap(),
        "\"InProgress\""
    );
    let status: ItemStatus = serde_json::from_str("\"Done\"").unwrap();
    assert_eq!(status, ItemStatus::Done);
}

#[test]
fn test_item_status_rejects_unknown() {
    assert!(ItemStatus::from_str("Blocked").is_err());
}

#[test]
fn test_meeting_type_wire_names_are_spaced() {
    assert_eq!(
        serde_json::to_string(&MeetingType::DailyStandup).unwrap(),
        "\"Daily Standup\""
    );
    assert_eq!(
        MeetingType::from_str("Sprint Retrospective").unwrap(),
        MeetingType::SprintRetrospective
    );
    assert!(MeetingType::from_str("DailyStandup").is_err());
}

#[test]
fn test_role_parse_and_display() {
    assert_eq!(Role::from_str("SuperAdmin").unwrap(), Role::SuperAdmin);
    assert_eq!(Role::ProductOwner.to_string(), "ProductOwner");
    assert!(Role::from_str("Admin").is_err());
}
