use clap::Subcommand;

#[derive(Subcommand)]
pub enum TeamCommands {
    /// List all teams
    List,

    /// Create a new team
    Create {
        /// Team name
        #[arg(long)]
        name: String,

        /// Associated project ID
        #[arg(long)]
        project_id: i64,
    },

    /// Update a team
    Update {
        /// Team ID
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        project_id: Option<i64>,
    },

    /// Add a member to a team (no-op when already present)
    AddMember {
        /// Team ID
        team_id: i64,
        /// User ID
        user_id: i64,
    },

    /// Remove a member from a team (no-op when absent)
    RemoveMember {
        /// Team ID
        team_id: i64,
        /// User ID
        user_id: i64,
    },
}
