use crate::{ClientError, ClientResult};

use scrum_core::{
    BacklogItem, BacklogItemPatch, Comment, LoginResponse, Meeting, MeetingPatch, NewBacklogItem,
    NewComment, NewMeeting, NewProject, NewSprint, NewTask, NewTeam, NewUser, Project,
    ProjectPatch, Sprint, SprintPatch, Task, TaskPatch, Team, TeamPatch, User, UserPatch,
};

use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Wraps a partial-update payload for the resources whose PUT carries the
/// id in the body rather than the path.
#[derive(Serialize)]
struct WithId<'a, T: Serialize> {
    id: i64,
    #[serde(flatten)]
    patch: &'a T,
}

#[derive(Serialize)]
struct IdBody {
    id: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MembershipBody {
    team_id: i64,
    user_id: i64,
}

/// HTTP gateway to the Scrum manager REST API.
///
/// Pure translation: one typed operation per request, no business logic and
/// no state beyond the base URL and the session token.
pub struct ApiClient {
    pub base_url: String,
    token: Option<String>,
    client: ReqwestClient,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
            client: ReqwestClient::new(),
        }
    }

    /// Attach the opaque session token returned by `login`.
    pub fn set_token(&mut self, token: &str) {
        self.token = Some(token.to_string());
    }

    pub fn clear_token(&mut self) {
        self.token = None;
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);

        if let Some(ref token) = self.token {
            req = req.bearer_auth(token);
        }

        req
    }

    /// Execute a request, mapping every non-success outcome to a typed error.
    ///
    /// Non-2xx bodies are expected to carry `{ "message": ... }`; when they
    /// do not, a generic status-derived message is used. 204 resolves to
    /// `Value::Null`.
    async fn execute(&self, req: reqwest::RequestBuilder) -> ClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();

        if status == StatusCode::NO_CONTENT {
            return Ok(Value::Null);
        }

        let bytes = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<Value>(&bytes)
                .ok()
                .and_then(|body| {
                    body.get("message")
                        .and_then(|m| m.as_str())
                        .map(String::from)
                })
                .unwrap_or_else(|| format!("Request failed with {}", status.as_u16()));
            log::debug!("{} -> {}: {}", self.base_url, status, message);
            return Err(ClientError::from_status(status, message));
        }

        if bytes.is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&bytes)
            .map_err(|e| ClientError::network(format!("non-JSON response: {e}")))
    }

    async fn fetch<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> ClientResult<T> {
        let body = self.execute(req).await?;
        Ok(serde_json::from_value(body)?)
    }

    // =========================================================================
    // Auth
    // =========================================================================

    /// `POST /auth/login`. A credential mismatch surfaces as
    /// `ClientError::Authentication`; callers decide how to present it.
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<LoginResponse> {
        #[derive(Serialize)]
        struct LoginRequest<'a> {
            email: &'a str,
            password: &'a str,
        }

        let body = LoginRequest { email, password };
        let req = self.request(Method::POST, "/auth/login").json(&body);
        self.fetch(req).await
    }

    // =========================================================================
    // Users
    // =========================================================================

    /// List all users, most recently created first.
    pub async fn list_users(&self) -> ClientResult<Vec<User>> {
        let req = self.request(Method::GET, "/users");
        self.fetch(req).await
    }

    pub async fn create_user(&self, user: &NewUser) -> ClientResult<User> {
        let req = self.request(Method::POST, "/users").json(user);
        self.fetch(req).await
    }

    /// `PUT /users` with the id in the body.
    pub async fn update_user(&self, id: i64, patch: &UserPatch) -> ClientResult<User> {
        let body = WithId { id, patch };
        let req = self.request(Method::PUT, "/users").json(&body);
        self.fetch(req).await
    }

    /// `DELETE /users` with the id in the body.
    pub async fn delete_user(&self, id: i64) -> ClientResult<()> {
        let body = IdBody { id };
        let req = self.request(Method::DELETE, "/users").json(&body);
        self.execute(req).await?;
        Ok(())
    }

    // =========================================================================
    // Projects
    // =========================================================================

    pub async fn list_projects(&self) -> ClientResult<Vec<Project>> {
        let req = self.request(Method::GET, "/projects");
        self.fetch(req).await
    }

    pub async fn create_project(&self, project: &NewProject) -> ClientResult<Project> {
        let req = self.request(Method::POST, "/projects").json(project);
        self.fetch(req).await
    }

    pub async fn update_project(&self, id: i64, patch: &ProjectPatch) -> ClientResult<Project> {
        let body = WithId { id, patch };
        let req = self.request(Method::PUT, "/projects").json(&body);
        self.fetch(req).await
    }

    /// One-way transition; there is no unarchive endpoint.
    pub async fn archive_project(&self, id: i64) -> ClientResult<()> {
        let body = IdBody { id };
        let req = self.request(Method::POST, "/projects/archive").json(&body);
        self.execute(req).await?;
        Ok(())
    }

    // =========================================================================
    // Teams
    // =========================================================================

    pub async fn list_teams(&self) -> ClientResult<Vec<Team>> {
        let req = self.request(Method::GET, "/teams");
        self.fetch(req).await
    }

    pub async fn create_team(&self, team: &NewTeam) -> ClientResult<Team> {
        let req = self.request(Method::POST, "/teams").json(team);
        self.fetch(req).await
    }

    pub async fn update_team(&self, id: i64, patch: &TeamPatch) -> ClientResult<Team> {
        let body = WithId { id, patch };
        let req = self.request(Method::PUT, "/teams").json(&body);
        self.fetch(req).await
    }

    pub async fn add_team_member(&self, team_id: i64, user_id: i64) -> ClientResult<()> {
        let body = MembershipBody { team_id, user_id };
        let req = self.request(Method::POST, "/teams/members").json(&body);
        self.execute(req).await?;
        Ok(())
    }

    pub async fn remove_team_member(&self, team_id: i64, user_id: i64) -> ClientResult<()> {
        let body = MembershipBody { team_id, user_id };
        let req = self.request(Method::DELETE, "/teams/members").json(&body);
        self.execute(req).await?;
        Ok(())
    }

    // =========================================================================
    // Sprints
    // =========================================================================

    pub async fn list_sprints(&self) -> ClientResult<Vec<Sprint>> {
        let req = self.request(Method::GET, "/sprints");
        self.fetch(req).await
    }

    pub async fn create_sprint(&self, sprint: &NewSprint) -> ClientResult<Sprint> {
        let req = self.request(Method::POST, "/sprints").json(sprint);
        self.fetch(req).await
    }

    pub async fn update_sprint(&self, id: i64, patch: &SprintPatch) -> ClientResult<Sprint> {
        let body = WithId { id, patch };
        let req = self.request(Method::PUT, "/sprints").json(&body);
        self.fetch(req).await
    }

    pub async fn delete_sprint(&self, id: i64) -> ClientResult<()> {
        let body = IdBody { id };
        let req = self.request(Method::DELETE, "/sprints").json(&body);
        self.execute(req).await?;
        Ok(())
    }

    // =========================================================================
    // Backlog items
    // =========================================================================

    pub async fn list_backlog_items(&self) -> ClientResult<Vec<BacklogItem>> {
        let req = self.request(Method::GET, "/backlog");
        self.fetch(req).await
    }

    pub async fn create_backlog_item(&self, item: &NewBacklogItem) -> ClientResult<BacklogItem> {
        let req = self.request(Method::POST, "/backlog").json(item);
        self.fetch(req).await
    }

    pub async fn update_backlog_item(
        &self,
        id: i64,
        patch: &BacklogItemPatch,
    ) -> ClientResult<BacklogItem> {
        let req = self
            .request(Method::PUT, &format!("/backlog/{}", id))
            .json(patch);
        self.fetch(req).await
    }

    pub async fn delete_backlog_item(&self, id: i64) -> ClientResult<()> {
        let req = self.request(Method::DELETE, &format!("/backlog/{}", id));
        self.execute(req).await?;
        Ok(())
    }

    /// `POST /backlog/{id}/comments`. Some deployments answer 204; the
    /// caller falls back to a local placeholder in that case.
    pub async fn add_comment(
        &self,
        item_id: i64,
        comment: &NewComment,
    ) -> ClientResult<Option<Comment>> {
        let req = self
            .request(Method::POST, &format!("/backlog/{}/comments", item_id))
            .json(comment);
        let body = self.execute(req).await?;

        if body.is_null() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_value(body)?))
    }

    // =========================================================================
    // Tasks
    // =========================================================================

    pub async fn list_tasks(&self) -> ClientResult<Vec<Task>> {
        let req = self.request(Method::GET, "/tasks");
        self.fetch(req).await
    }

    pub async fn create_task(&self, task: &NewTask) -> ClientResult<Task> {
        let req = self.request(Method::POST, "/tasks").json(task);
        self.fetch(req).await
    }

    pub async fn update_task(&self, id: i64, patch: &TaskPatch) -> ClientResult<Task> {
        let req = self
            .request(Method::PUT, &format!("/tasks/{}", id))
            .json(patch);
        self.fetch(req).await
    }

    pub async fn delete_task(&self, id: i64) -> ClientResult<()> {
        let req = self.request(Method::DELETE, &format!("/tasks/{}", id));
        self.execute(req).await?;
        Ok(())
    }

    // =========================================================================
    // Meetings
    // =========================================================================

    pub async fn list_meetings(&self) -> ClientResult<Vec<Meeting>> {
        let req = self.request(Method::GET, "/meetings");
        self.fetch(req).await
    }

    pub async fn create_meeting(&self, meeting: &NewMeeting) -> ClientResult<Meeting> {
        let req = self.request(Method::POST, "/meetings").json(meeting);
        self.fetch(req).await
    }

    pub async fn update_meeting(&self, id: i64, patch: &MeetingPatch) -> ClientResult<Meeting> {
        let body = WithId { id, patch };
        let req = self.request(Method::PUT, "/meetings").json(&body);
        self.fetch(req).await
    }

    pub async fn delete_meeting(&self, id: i64) -> ClientResult<()> {
        let body = IdBody { id };
        let req = self.request(Method::DELETE, "/meetings").json(&body);
        self.execute(req).await?;
        Ok(())
    }
}
