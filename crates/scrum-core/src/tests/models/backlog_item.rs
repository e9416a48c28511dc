use crate::{BacklogItem, Comment, ItemStatus};

use chrono::Utc;

fn item() -> BacklogItem {
    BacklogItem {
        id: 1,
        title: "User Authentication".to_string(),
        description: "Implement user login and registration".to_string(),
        priority: 1,
        estimation: 8,
        status: ItemStatus::ToDo,
        project_id: 1,
        sprint_id: None,
        assigned_to_id: None,
        comments: Vec::new(),
    }
}

#[test]
fn test_push_comment_appends_at_end() {
    let mut item = item();
    item.push_comment(Comment {
        id: 1,
        text: "first".to_string(),
        user_id: 2,
        created_at: Utc::now(),
    });
    item.push_comment(Comment {
        id: 2,
        text: "second".to_string(),
        user_id: 3,
        created_at: Utc::now(),
    });

    assert_eq!(item.comments.len(), 2);
    assert_eq!(item.comments[0].text, "first");
    assert_eq!(item.comments[1].text, "second");
}

#[test]
fn test_deserialize_missing_comments_defaults_empty() {
    let json = r#"{
        "id": 101,
        "title": "Product Catalog",
        "description": "Create product listing pages",
        "priority": 2,
        "estimation": 13,
        "status": "ToDo",
        "projectId": 1
    }"#;

    let item: BacklogItem = serde_json::from_str(json).unwrap();
    assert!(item.comments.is_empty());
    assert_eq!(item.sprint_id, None);
    assert_eq!(item.status, ItemStatus::ToDo);
}
