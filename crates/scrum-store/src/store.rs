use crate::session::{PersistedSession, Session, SessionStore};
use crate::{StoreResult, view};

use scrum_client::ApiClient;
use scrum_core::{
    BacklogItem, BacklogItemPatch, Comment, Meeting, MeetingPatch, NewBacklogItem, NewComment,
    NewMeeting, NewProject, NewSprint, NewTask, NewTeam, NewUser, Project, ProjectPatch, Sprint,
    SprintPatch, Task, TaskPatch, Team, TeamPatch, User, UserPatch,
};

use chrono::Utc;

/// Process-wide client-side snapshot of the organization's data plus the
/// current session.
///
/// Every mutation follows the same discipline: the network call completes
/// first, and only a server-confirmed entity is merged into local state.
/// There is no optimistic insert and no local fallback on failure. Reads are
/// snapshot reads of the public collections; all writes go through actions.
///
/// Collections are organization-wide, not per-session, so `logout` clears
/// the session but deliberately leaves them cached.
pub struct AppStore {
    client: ApiClient,
    session_store: SessionStore,
    pub session: Session,

    pub users: Vec<User>,
    pub projects: Vec<Project>,
    pub teams: Vec<Team>,
    pub sprints: Vec<Sprint>,
    pub backlog_items: Vec<BacklogItem>,
    pub tasks: Vec<Task>,
    pub meetings: Vec<Meeting>,
}

impl AppStore {
    /// Start empty and anonymous. Call `restore_session` to pick up a
    /// previously persisted login.
    pub fn new(client: ApiClient, session_store: SessionStore) -> Self {
        Self {
            client,
            session_store,
            session: Session::Anonymous,
            users: Vec::new(),
            projects: Vec::new(),
            teams: Vec::new(),
            sprints: Vec::new(),
            backlog_items: Vec::new(),
            tasks: Vec::new(),
            meetings: Vec::new(),
        }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.current_user()
    }

    /// Navigation destinations the current user may see. Anonymous sessions
    /// see nothing.
    pub fn navigation(&self) -> Vec<&'static view::NavEntry> {
        match self.current_user() {
            Some(user) => view::role_gated_navigation(user.role),
            None => Vec::new(),
        }
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Restore a persisted session, if any. Returns true when a session was
    /// restored.
    pub fn restore_session(&mut self) -> bool {
        match self.session_store.load() {
            Some(persisted) => {
                self.client.set_token(&persisted.auth_token);
                log::info!("Restored session for {}", persisted.current_user.email);
                self.session = Session::Authenticated(persisted.current_user);
                true
            }
            None => false,
        }
    }

    /// Authenticate against the backend.
    ///
    /// A credential mismatch is an expected outcome, reported as `Ok(false)`
    /// with state unchanged; transport failures propagate as errors. Either
    /// way a failed attempt restores whatever session was active before it,
    /// including an earlier authenticated one. On success the session is
    /// persisted for later `restore_session` calls.
    pub async fn login(&mut self, email: &str, password: &str) -> StoreResult<bool> {
        let prior = std::mem::replace(&mut self.session, Session::AuthenticationInFlight);

        match self.client.login(email, password).await {
            Ok(response) => {
                // Persist before mutating token or session, so a write
                // failure leaves all three in their prior, consistent state.
                if let Err(err) = self.session_store.save(&PersistedSession {
                    auth_token: response.token.clone(),
                    current_user: response.user.clone(),
                }) {
                    self.session = prior;
                    return Err(err);
                }
                self.client.set_token(&response.token);
                log::info!("Logged in as {} ({})", response.user.email, response.user.role);
                self.session = Session::Authenticated(response.user);
                Ok(true)
            }
            Err(err) if err.is_authentication() => {
                self.session = prior;
                log::info!("Login rejected for {email}");
                Ok(false)
            }
            Err(err) => {
                self.session = prior;
                Err(err.into())
            }
        }
    }

    /// Clear the session and its persisted form. Cached collections stay.
    pub fn logout(&mut self) {
        self.session = Session::Anonymous;
        self.session_store.clear();
        self.client.clear_token();
    }

    // =========================================================================
    // Users
    // =========================================================================

    /// Replace the user collection with the server's current listing.
    pub async fn fetch_users(&mut self) -> StoreResult<()> {
        self.users = self.client.list_users().await?;
        Ok(())
    }

    pub async fn add_user(&mut self, user: NewUser) -> StoreResult<User> {
        let user = self.client.create_user(&user).await?;
        self.users.push(user.clone());
        Ok(user)
    }

    pub async fn update_user(&mut self, id: i64, patch: UserPatch) -> StoreResult<User> {
        let user = self.client.update_user(id, &patch).await?;
        if let Some(slot) = self.users.iter_mut().find(|u| u.id == id) {
            *slot = user.clone();
        }
        Ok(user)
    }

    pub async fn delete_user(&mut self, id: i64) -> StoreResult<()> {
        self.client.delete_user(id).await?;
        self.users.retain(|u| u.id != id);
        Ok(())
    }

    // =========================================================================
    // Projects
    // =========================================================================

    pub async fn fetch_projects(&mut self) -> StoreResult<()> {
        self.projects = self.client.list_projects().await?;
        Ok(())
    }

    pub async fn add_project(&mut self, project: NewProject) -> StoreResult<Project> {
        let project = self.client.create_project(&project).await?;
        self.projects.push(project.clone());
        Ok(project)
    }

    pub async fn update_project(&mut self, id: i64, patch: ProjectPatch) -> StoreResult<Project> {
        let project = self.client.update_project(id, &patch).await?;
        if let Some(slot) = self.projects.iter_mut().find(|p| p.id == id) {
            *slot = project.clone();
        }
        Ok(project)
    }

    /// One-way: the archived flag never flips back within this client.
    pub async fn archive_project(&mut self, id: i64) -> StoreResult<()> {
        self.client.archive_project(id).await?;
        if let Some(project) = self.projects.iter_mut().find(|p| p.id == id) {
            project.archived = true;
        }
        Ok(())
    }

    // =========================================================================
    // Teams
    // =========================================================================

    pub async fn fetch_teams(&mut self) -> StoreResult<()> {
        self.teams = self.client.list_teams().await?;
        Ok(())
    }

    pub async fn add_team(&mut self, team: NewTeam) -> StoreResult<Team> {
        let team = self.client.create_team(&team).await?;
        self.teams.push(team.clone());
        Ok(team)
    }

    pub async fn update_team(&mut self, id: i64, patch: TeamPatch) -> StoreResult<Team> {
        let team = self.client.update_team(id, &patch).await?;
        if let Some(slot) = self.teams.iter_mut().find(|t| t.id == id) {
            *slot = team.clone();
        }
        Ok(team)
    }

    /// Set insert: adding a member twice leaves one occurrence.
    pub async fn add_team_member(&mut self, team_id: i64, user_id: i64) -> StoreResult<()> {
        self.client.add_team_member(team_id, user_id).await?;
        if let Some(team) = self.teams.iter_mut().find(|t| t.id == team_id) {
            team.add_member(user_id);
        }
        Ok(())
    }

    /// Set remove: removing an absent member is a no-op.
    pub async fn remove_team_member(&mut self, team_id: i64, user_id: i64) -> StoreResult<()> {
        self.client.remove_team_member(team_id, user_id).await?;
        if let Some(team) = self.teams.iter_mut().find(|t| t.id == team_id) {
            team.remove_member(user_id);
        }
        Ok(())
    }

    // =========================================================================
    // Sprints
    // =========================================================================

    pub async fn fetch_sprints(&mut self) -> StoreResult<()> {
        self.sprints = self.client.list_sprints().await?;
        Ok(())
    }

    pub async fn add_sprint(&mut self, sprint: NewSprint) -> StoreResult<Sprint> {
        let sprint = self.client.create_sprint(&sprint).await?;
        self.sprints.push(sprint.clone());
        Ok(sprint)
    }

    pub async fn update_sprint(&mut self, id: i64, patch: SprintPatch) -> StoreResult<Sprint> {
        let sprint = self.client.update_sprint(id, &patch).await?;
        if let Some(slot) = self.sprints.iter_mut().find(|s| s.id == id) {
            *slot = sprint.clone();
        }
        Ok(sprint)
    }

    pub async fn delete_sprint(&mut self, id: i64) -> StoreResult<()> {
        self.client.delete_sprint(id).await?;
        self.sprints.retain(|s| s.id != id);
        Ok(())
    }

    // =========================================================================
    // Backlog items
    // =========================================================================

    pub async fn fetch_backlog_items(&mut self) -> StoreResult<()> {
        self.backlog_items = self.client.list_backlog_items().await?;
        Ok(())
    }

    pub async fn add_backlog_item(&mut self, item: NewBacklogItem) -> StoreResult<BacklogItem> {
        let item = self.client.create_backlog_item(&item).await?;
        self.backlog_items.push(item.clone());
        Ok(item)
    }

    pub async fn update_backlog_item(
        &mut self,
        id: i64,
        patch: BacklogItemPatch,
    ) -> StoreResult<BacklogItem> {
        let item = self.client.update_backlog_item(id, &patch).await?;
        if let Some(slot) = self.backlog_items.iter_mut().find(|i| i.id == id) {
            *slot = item.clone();
        }
        Ok(item)
    }

    pub async fn delete_backlog_item(&mut self, id: i64) -> StoreResult<()> {
        self.client.delete_backlog_item(id).await?;
        self.backlog_items.retain(|i| i.id != id);
        Ok(())
    }

    /// Append a comment to a backlog item. When the backend confirms without
    /// a body, a locally timestamped placeholder (millisecond id) stands in
    /// until the next fetch.
    pub async fn add_comment(&mut self, item_id: i64, comment: NewComment) -> StoreResult<Comment> {
        let confirmed = self.client.add_comment(item_id, &comment).await?;
        let comment = confirmed.unwrap_or_else(|| Comment {
            id: Utc::now().timestamp_millis(),
            text: comment.text,
            user_id: comment.user_id,
            created_at: comment.created_at,
        });

        if let Some(item) = self.backlog_items.iter_mut().find(|i| i.id == item_id) {
            item.push_comment(comment.clone());
        }
        Ok(comment)
    }

    // =========================================================================
    // Tasks
    // =========================================================================

    pub async fn fetch_tasks(&mut self) -> StoreResult<()> {
        self.tasks = self.client.list_tasks().await?;
        Ok(())
    }

    pub async fn add_task(&mut self, task: NewTask) -> StoreResult<Task> {
        let task = self.client.create_task(&task).await?;
        self.tasks.push(task.clone());
        Ok(task)
    }

    pub async fn update_task(&mut self, id: i64, patch: TaskPatch) -> StoreResult<Task> {
        let task = self.client.update_task(id, &patch).await?;
        if let Some(slot) = self.tasks.iter_mut().find(|t| t.id == id) {
            *slot = task.clone();
        }
        Ok(task)
    }

    // =========================================================================
    // Meetings
    // =========================================================================

    pub async fn fetch_meetings(&mut self) -> StoreResult<()> {
        self.meetings = self.client.list_meetings().await?;
        Ok(())
    }

    pub async fn add_meeting(&mut self, meeting: NewMeeting) -> StoreResult<Meeting> {
        let meeting = self.client.create_meeting(&meeting).await?;
        self.meetings.push(meeting.clone());
        Ok(meeting)
    }

    /// Attendee management goes through here: supply `attendee_ids` in the
    /// patch to replace the set.
    pub async fn update_meeting(&mut self, id: i64, patch: MeetingPatch) -> StoreResult<Meeting> {
        let meeting = self.client.update_meeting(id, &patch).await?;
        if let Some(slot) = self.meetings.iter_mut().find(|m| m.id == id) {
            *slot = meeting.clone();
        }
        Ok(meeting)
    }

    pub async fn delete_meeting(&mut self, id: i64) -> StoreResult<()> {
        self.client.delete_meeting(id).await?;
        self.meetings.retain(|m| m.id != id);
        Ok(())
    }
}
