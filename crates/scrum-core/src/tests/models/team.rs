use crate::Team;

fn team() -> Team {
    Team {
        id: 1,
        name: "Alpha Team".to_string(),
        project_id: 1,
        member_ids: vec![2, 4],
    }
}

#[test]
fn test_add_member_appends() {
    let mut team = team();
    team.add_member(5);
    assert_eq!(team.member_ids, vec![2, 4, 5]);
}

#[test]
fn test_add_member_twice_is_noop() {
    let mut team = team();
    team.add_member(4);
    team.add_member(4);
    assert_eq!(team.member_ids, vec![2, 4]);
}

#[test]
fn test_remove_member() {
    let mut team = team();
    team.remove_member(2);
    assert_eq!(team.member_ids, vec![4]);
}

#[test]
fn test_remove_absent_member_is_noop() {
    let mut team = team();
    team.remove_member(99);
    assert_eq!(team.member_ids, vec![2, 4]);
}

#[test]
fn test_deserialize_missing_member_ids_defaults_empty() {
    let team: Team =
        serde_json::from_str(r#"{"id":7,"name":"Beta","projectId":2}"#).unwrap();
    assert!(team.member_ids.is_empty());
}
