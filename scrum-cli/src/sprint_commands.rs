use chrono::NaiveDate;
use clap::Subcommand;
use scrum_core::SprintStatus;

#[derive(Subcommand)]
pub enum SprintCommands {
    /// List sprints, optionally filtered by status
    List {
        /// Status: Planned, Active, or Concluded
        #[arg(long)]
        status: Option<SprintStatus>,
    },

    /// Create a new sprint
    Create {
        /// Sprint name
        #[arg(long)]
        name: String,

        /// Sprint goal
        #[arg(long, default_value = "")]
        goal: String,

        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start_date: NaiveDate,

        /// End date (YYYY-MM-DD)
        #[arg(long)]
        end_date: NaiveDate,

        /// Project ID
        #[arg(long)]
        project_id: i64,

        /// Team ID (optional; the backend derives it from the project)
        #[arg(long)]
        team_id: Option<i64>,
    },

    /// Update a sprint
    Update {
        /// Sprint ID
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        goal: Option<String>,

        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<NaiveDate>,

        /// End date (YYYY-MM-DD)
        #[arg(long)]
        end_date: Option<NaiveDate>,

        /// Status: Planned, Active, or Concluded
        #[arg(long)]
        status: Option<SprintStatus>,

        #[arg(long)]
        team_id: Option<i64>,
    },

    /// Delete a sprint
    Delete {
        /// Sprint ID
        id: i64,
    },
}
