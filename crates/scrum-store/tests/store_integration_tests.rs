//! Integration tests for the application store against a wiremock backend.

use scrum_client::ApiClient;
use scrum_core::{BacklogItemPatch, ItemStatus, NewBacklogItem, NewComment, Role};
use scrum_store::{AppStore, Session, SessionStore};

use chrono::Utc;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn store_for(server: &MockServer, temp: &TempDir) -> AppStore {
    AppStore::new(
        ApiClient::new(&server.uri()),
        SessionStore::new(temp.path().join("session.json")),
    )
}

fn login_ok() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "token": "opaque-session-token",
        "user": {
            "id": 1,
            "name": "Admin User",
            "email": "admin@scrum.com",
            "role": "SuperAdmin"
        }
    }))
}

#[tokio::test]
async fn test_login_success_sets_and_persists_session() {
    let server = MockServer::start().await;
    let temp = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({
            "email": "admin@scrum.com",
            "password": "admin123"
        })))
        .respond_with(login_ok())
        .mount(&server)
        .await;

    let mut store = store_for(&server, &temp);
    assert!(store.login("admin@scrum.com", "admin123").await.unwrap());

    let user = store.current_user().unwrap();
    assert_eq!(user.role, Role::SuperAdmin);

    // A fresh store restores the persisted session.
    let mut restored = store_for(&server, &temp);
    assert!(restored.restore_session());
    assert_eq!(restored.current_user().unwrap().email, "admin@scrum.com");
}

#[tokio::test]
async fn test_login_failure_returns_false_and_leaves_state() {
    let server = MockServer::start().await;
    let temp = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({ "message": "Invalid email or password" })),
        )
        .mount(&server)
        .await;

    let mut store = store_for(&server, &temp);
    assert!(!store.login("admin@scrum.com", "wrong").await.unwrap());

    assert_eq!(store.session, Session::Anonymous);
    assert!(store.current_user().is_none());

    // Nothing persisted, so nothing restores.
    let mut fresh = store_for(&server, &temp);
    assert!(!fresh.restore_session());
}

#[tokio::test]
async fn test_failed_relogin_keeps_previous_session() {
    let server = MockServer::start().await;
    let temp = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({
            "email": "admin@scrum.com",
            "password": "admin123"
        })))
        .respond_with(login_ok())
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({
            "email": "admin@scrum.com",
            "password": "wrong"
        })))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({ "message": "Invalid email or password" })),
        )
        .mount(&server)
        .await;

    let mut store = store_for(&server, &temp);
    assert!(store.login("admin@scrum.com", "admin123").await.unwrap());

    // A rejected later attempt restores the session it interrupted.
    assert!(!store.login("admin@scrum.com", "wrong").await.unwrap());
    assert!(store.session.is_authenticated());
    assert_eq!(store.current_user().unwrap().email, "admin@scrum.com");

    // The persisted session survives too.
    let mut fresh = store_for(&server, &temp);
    assert!(fresh.restore_session());
}

#[tokio::test]
async fn test_logout_clears_session_but_keeps_collections() {
    let server = MockServer::start().await;
    let temp = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(login_ok())
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 1,
            "name": "E-Commerce Platform",
            "description": "Modern e-commerce platform",
            "startDate": "2025-01-01",
            "expectedEndDate": "2025-06-30",
            "archived": false
        }])))
        .mount(&server)
        .await;

    let mut store = store_for(&server, &temp);
    store.login("admin@scrum.com", "admin123").await.unwrap();
    store.fetch_projects().await.unwrap();

    store.logout();

    assert!(store.current_user().is_none());
    // Organization-wide cache survives the session.
    assert_eq!(store.projects.len(), 1);

    let mut fresh = store_for(&server, &temp);
    assert!(!fresh.restore_session());
}

#[tokio::test]
async fn test_fetch_is_idempotent() {
    let server = MockServer::start().await;
    let temp = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/sprints"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 1,
            "name": "Sprint 1",
            "goal": "Setup project infrastructure",
            "startDate": "2025-01-01",
            "endDate": "2025-01-14",
            "status": "Active",
            "projectId": 1,
            "teamId": 1
        }])))
        .mount(&server)
        .await;

    let mut store = store_for(&server, &temp);
    store.fetch_sprints().await.unwrap();
    let first = store.sprints.clone();
    store.fetch_sprints().await.unwrap();

    assert_eq!(store.sprints, first);
}

#[tokio::test]
async fn test_create_then_update_backlog_item_scenario() {
    let server = MockServer::start().await;
    let temp = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/backlog"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 101,
            "title": "User Authentication",
            "description": "Implement user login and registration",
            "priority": 1,
            "estimation": 8,
            "status": "ToDo",
            "projectId": 1
        })))
        .mount(&server)
        .await;

    // Only the supplied field appears in the update body.
    Mock::given(method("PUT"))
        .and(path("/backlog/101"))
        .and(body_json(json!({ "status": "InProgress" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 101,
            "title": "User Authentication",
            "description": "Implement user login and registration",
            "priority": 1,
            "estimation": 8,
            "status": "InProgress",
            "projectId": 1
        })))
        .mount(&server)
        .await;

    let mut store = store_for(&server, &temp);
    let created = store
        .add_backlog_item(NewBacklogItem {
            title: "User Authentication".to_string(),
            description: "Implement user login and registration".to_string(),
            priority: 1,
            estimation: 8,
            status: ItemStatus::ToDo,
            project_id: 1,
            sprint_id: None,
            assigned_to_id: None,
        })
        .await
        .unwrap();

    assert_eq!(created.id, 101);
    assert!(created.comments.is_empty());

    store
        .update_backlog_item(
            101,
            BacklogItemPatch {
                status: Some(ItemStatus::InProgress),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let item = store.backlog_items.iter().find(|i| i.id == 101).unwrap();
    assert_eq!(item.status, ItemStatus::InProgress);
    assert_eq!(item.title, "User Authentication");
    assert_eq!(item.priority, 1);
    assert_eq!(item.estimation, 8);
}

#[tokio::test]
async fn test_update_failure_leaves_collection_unchanged() {
    let server = MockServer::start().await;
    let temp = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 1,
            "description": "Setup authentication API",
            "points": 5,
            "status": "Done",
            "itemBacklogId": 1,
            "assignedToId": 4
        }])))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/tasks/1"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "message": "Task not found" })),
        )
        .mount(&server)
        .await;

    let mut store = store_for(&server, &temp);
    store.fetch_tasks().await.unwrap();
    let before = store.tasks.clone();

    let result = store
        .update_task(
            1,
            scrum_core::TaskPatch {
                status: Some(ItemStatus::InProgress),
                ..Default::default()
            },
        )
        .await;

    assert!(result.is_err());
    assert_eq!(store.tasks, before);
}

#[tokio::test]
async fn test_delete_applies_only_after_success() {
    let server = MockServer::start().await;
    let temp = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/meetings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 1,
                "title": "Sprint Planning",
                "type": "Sprint Planning",
                "date": "2025-01-01T09:00:00",
                "duration": 120,
                "teamId": 1,
                "attendeeIds": [2, 3, 4]
            },
            {
                "id": 2,
                "title": "Daily Standup",
                "type": "Daily Standup",
                "date": "2025-01-06T09:00:00",
                "duration": 15,
                "teamId": 1,
                "attendeeIds": [2, 4]
            }
        ])))
        .mount(&server)
        .await;
    // First delete fails, second succeeds.
    Mock::given(method("DELETE"))
        .and(path("/meetings"))
        .and(body_json(json!({ "id": 2 })))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "message": "boom" })))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/meetings"))
        .and(body_json(json!({ "id": 2 })))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let mut store = store_for(&server, &temp);
    store.fetch_meetings().await.unwrap();

    assert!(store.delete_meeting(2).await.is_err());
    assert_eq!(store.meetings.len(), 2);

    store.delete_meeting(2).await.unwrap();
    assert_eq!(store.meetings.len(), 1);
    assert_eq!(store.meetings[0].id, 1);
}

#[tokio::test]
async fn test_team_member_set_invariants() {
    let server = MockServer::start().await;
    let temp = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/teams"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 1,
            "name": "Alpha Team",
            "projectId": 1,
            "memberIds": [2, 4]
        }])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/teams/members"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/teams/members"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let mut store = store_for(&server, &temp);
    store.fetch_teams().await.unwrap();

    store.add_team_member(1, 5).await.unwrap();
    store.add_team_member(1, 5).await.unwrap();
    assert_eq!(store.teams[0].member_ids, vec![2, 4, 5]);

    store.remove_team_member(1, 99).await.unwrap();
    assert_eq!(store.teams[0].member_ids, vec![2, 4, 5]);

    store.remove_team_member(1, 4).await.unwrap();
    assert_eq!(store.teams[0].member_ids, vec![2, 5]);
}

#[tokio::test]
async fn test_comment_append_only() {
    let server = MockServer::start().await;
    let temp = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/backlog"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 1,
            "title": "User Authentication",
            "description": "",
            "priority": 1,
            "estimation": 8,
            "status": "InProgress",
            "projectId": 1,
            "comments": [{
                "id": 10,
                "text": "already here",
                "userId": 2,
                "createdAt": "2025-01-02T10:00:00Z"
            }]
        }])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/backlog/1/comments"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 11,
            "text": "server-confirmed",
            "userId": 3,
            "createdAt": "2025-01-03T09:00:00Z"
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    // Second comment confirmed without a body.
    Mock::given(method("POST"))
        .and(path("/backlog/1/comments"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let mut store = store_for(&server, &temp);
    store.fetch_backlog_items().await.unwrap();

    store
        .add_comment(
            1,
            NewComment {
                text: "server-confirmed".to_string(),
                user_id: 3,
                created_at: Utc::now(),
            },
        )
        .await
        .unwrap();

    let placeholder = store
        .add_comment(
            1,
            NewComment {
                text: "placeholder".to_string(),
                user_id: 3,
                created_at: Utc::now(),
            },
        )
        .await
        .unwrap();

    let comments = &store.backlog_items[0].comments;
    assert_eq!(comments.len(), 3);
    // Previously present comments keep their positions.
    assert_eq!(comments[0].id, 10);
    assert_eq!(comments[1].id, 11);
    assert_eq!(comments[2].text, "placeholder");
    // Placeholder carries a locally generated millisecond id.
    assert!(placeholder.id > 1_000_000_000_000);
}

#[tokio::test]
async fn test_archive_project_is_monotonic() {
    let server = MockServer::start().await;
    let temp = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 1,
            "name": "E-Commerce Platform",
            "description": "",
            "startDate": "2025-01-01",
            "expectedEndDate": "2025-06-30",
            "archived": false
        }])))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/projects/archive"))
        .and(body_json(json!({ "id": 1 })))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    // Every listing after the archive reports the flag set.
    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 1,
            "name": "E-Commerce Platform",
            "description": "",
            "startDate": "2025-01-01",
            "expectedEndDate": "2025-06-30",
            "archived": true
        }])))
        .mount(&server)
        .await;

    let mut store = store_for(&server, &temp);
    store.fetch_projects().await.unwrap();
    assert!(!store.projects[0].archived);

    store.archive_project(1).await.unwrap();
    assert!(store.projects[0].archived);

    store.fetch_projects().await.unwrap();
    assert!(store.projects[0].archived);
}

#[tokio::test]
async fn test_navigation_follows_session() {
    let server = MockServer::start().await;
    let temp = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(login_ok())
        .mount(&server)
        .await;

    let mut store = store_for(&server, &temp);
    assert!(store.navigation().is_empty());

    store.login("admin@scrum.com", "admin123").await.unwrap();
    let names: Vec<&str> = store.navigation().iter().map(|e| e.name).collect();
    assert!(names.contains(&"Users"));
}
