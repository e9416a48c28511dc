use crate::{
    backlog_commands::BacklogCommands, meeting_commands::MeetingCommands,
    project_commands::ProjectCommands, sprint_commands::SprintCommands,
    task_commands::TaskCommands, team_commands::TeamCommands, user_commands::UserCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Authenticate and persist the session
    Login {
        /// Account e-mail
        email: String,
        /// Account password
        password: String,
    },

    /// Clear the current session
    Logout,

    /// Show the navigation destinations visible to the current user
    Nav,

    /// Show the backlog as a board, grouped by workflow status
    Board,

    /// User operations
    User {
        #[command(subcommand)]
        action: UserCommands,
    },

    /// Project operations
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },

    /// Team operations
    Team {
        #[command(subcommand)]
        action: TeamCommands,
    },

    /// Sprint operations
    Sprint {
        #[command(subcommand)]
        action: SprintCommands,
    },

    /// Backlog item operations
    Backlog {
        #[command(subcommand)]
        action: BacklogCommands,
    },

    /// Task operations
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },

    /// Meeting operations
    Meeting {
        #[command(subcommand)]
        action: MeetingCommands,
    },
}
