mod backlog_item;
mod meeting;
mod role_memberships;
mod statuses;
mod team;
