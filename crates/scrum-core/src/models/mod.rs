pub mod backlog_item;
pub mod comment;
pub mod item_status;
pub mod meeting;
pub mod meeting_type;
pub mod payloads;
pub mod project;
pub mod role;
pub mod role_memberships;
pub mod sprint;
pub mod sprint_status;
pub mod task;
pub mod team;
pub mod user;
