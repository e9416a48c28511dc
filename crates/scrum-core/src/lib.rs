pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::backlog_item::BacklogItem;
pub use models::comment::Comment;
pub use models::item_status::ItemStatus;
pub use models::meeting::Meeting;
pub use models::meeting_type::MeetingType;
pub use models::payloads::{
    BacklogItemPatch, LoginResponse, MeetingPatch, NewBacklogItem, NewComment, NewMeeting,
    NewProject, NewSprint, NewTask, NewTeam, NewUser, ProjectPatch, SprintPatch, TaskPatch,
    TeamPatch, UserPatch,
};
pub use models::project::Project;
pub use models::role::Role;
pub use models::role_memberships::{RoleMemberships, SUPER_ADMIN_EMAIL};
pub use models::sprint::Sprint;
pub use models::sprint_status::SprintStatus;
pub use models::task::Task;
pub use models::team::Team;
pub use models::user::User;
