//! Derived View Model: pure, referentially transparent reads over a store
//! snapshot. Nothing here caches; every call recomputes from its inputs.

use scrum_core::{BacklogItem, ItemStatus, Meeting, Project, Role, Sprint, SprintStatus, Team, User};

use chrono::NaiveDateTime;

/// Fallback token for an unresolved project or team reference.
pub const UNKNOWN: &str = "Unknown";
/// Fallback token for an unset or unresolved assignee.
pub const UNASSIGNED: &str = "Unassigned";
/// Fallback token for a backlog item outside any sprint.
pub const NO_SPRINT: &str = "No Sprint";

/// Entities with a display name, resolvable by id.
pub trait HasName {
    fn entity_id(&self) -> i64;
    fn entity_name(&self) -> &str;
}

impl HasName for User {
    fn entity_id(&self) -> i64 {
        self.id
    }
    fn entity_name(&self) -> &str {
        &self.name
    }
}

impl HasName for Project {
    fn entity_id(&self) -> i64 {
        self.id
    }
    fn entity_name(&self) -> &str {
        &self.name
    }
}

impl HasName for Team {
    fn entity_id(&self) -> i64 {
        self.id
    }
    fn entity_name(&self) -> &str {
        &self.name
    }
}

impl HasName for Sprint {
    fn entity_id(&self) -> i64 {
        self.id
    }
    fn entity_name(&self) -> &str {
        &self.name
    }
}

/// Display name of the entity with the given id, or `fallback` when the id
/// is unset or resolves to nothing.
pub fn resolve_name<T: HasName>(items: &[T], id: Option<i64>, fallback: &str) -> String {
    id.and_then(|id| items.iter().find(|item| item.entity_id() == id))
        .map(|item| item.entity_name().to_string())
        .unwrap_or_else(|| fallback.to_string())
}

/// Backlog items (board column content) with the given workflow status,
/// in collection order.
pub fn items_by_status(items: &[BacklogItem], status: ItemStatus) -> Vec<&BacklogItem> {
    items.iter().filter(|item| item.status == status).collect()
}

pub fn sprints_by_status(sprints: &[Sprint], status: SprintStatus) -> Vec<&Sprint> {
    sprints
        .iter()
        .filter(|sprint| sprint.status == status)
        .collect()
}

/// Meetings partitioned around `now`: upcoming (date >= now) ascending,
/// past (date < now) descending.
#[derive(Debug, Default)]
pub struct MeetingBuckets<'a> {
    pub upcoming: Vec<&'a Meeting>,
    pub past: Vec<&'a Meeting>,
}

pub fn meeting_buckets(meetings: &[Meeting], now: NaiveDateTime) -> MeetingBuckets<'_> {
    let mut buckets = MeetingBuckets::default();

    for meeting in meetings {
        if meeting.date >= now {
            buckets.upcoming.push(meeting);
        } else {
            buckets.past.push(meeting);
        }
    }

    buckets.upcoming.sort_by_key(|m| m.date);
    buckets.past.sort_by_key(|m| std::cmp::Reverse(m.date));
    buckets
}

/// Display tier for a positive priority: clamp(priority - 1) into [0, 3].
/// Priorities above 4 collapse into the lowest-urgency tier.
pub fn priority_tier(priority: u32) -> u32 {
    priority.saturating_sub(1).min(3)
}

/// The team a sprint belongs to.
///
/// The sprint's own `team_id` wins when present; otherwise the team is
/// derived transitively through the project, matching the backend's model.
pub fn sprint_team<'a>(sprint: &Sprint, teams: &'a [Team]) -> Option<&'a Team> {
    match sprint.team_id {
        Some(team_id) => teams.iter().find(|t| t.id == team_id),
        None => teams.iter().find(|t| t.project_id == sprint.project_id),
    }
}

/// A navigation destination and the roles allowed to see it.
#[derive(Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub name: &'static str,
    pub path: &'static str,
    pub roles: &'static [Role],
}

/// Fixed navigation table; not user-editable.
pub const NAVIGATION: [NavEntry; 8] = [
    NavEntry {
        name: "Dashboard",
        path: "/dashboard",
        roles: &[
            Role::SuperAdmin,
            Role::ScrumMaster,
            Role::ProductOwner,
            Role::Developer,
        ],
    },
    NavEntry {
        name: "Users",
        path: "/users",
        roles: &[Role::SuperAdmin],
    },
    NavEntry {
        name: "Projects",
        path: "/projects",
        roles: &[Role::SuperAdmin, Role::ScrumMaster, Role::ProductOwner],
    },
    NavEntry {
        name: "Teams",
        path: "/teams",
        roles: &[Role::SuperAdmin, Role::ScrumMaster],
    },
    NavEntry {
        name: "Sprints",
        path: "/sprints",
        roles: &[Role::ScrumMaster, Role::ProductOwner, Role::Developer],
    },
    NavEntry {
        name: "Backlog",
        path: "/backlog",
        roles: &[Role::ProductOwner, Role::ScrumMaster, Role::Developer],
    },
    NavEntry {
        name: "Board",
        path: "/board",
        roles: &[Role::ScrumMaster, Role::ProductOwner, Role::Developer],
    },
    NavEntry {
        name: "Meetings",
        path: "/meetings",
        roles: &[Role::ScrumMaster, Role::ProductOwner, Role::Developer],
    },
];

/// The ordered subset of navigation destinations visible to a role.
pub fn role_gated_navigation(role: Role) -> Vec<&'static NavEntry> {
    NAVIGATION
        .iter()
        .filter(|entry| entry.roles.contains(&role))
        .collect()
}
