use chrono::NaiveDate;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// List all projects
    List,

    /// Create a new project
    Create {
        /// Project name
        #[arg(long)]
        name: String,

        /// Description
        #[arg(long, default_value = "")]
        description: String,

        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start_date: NaiveDate,

        /// Expected end date (YYYY-MM-DD)
        #[arg(long)]
        expected_end_date: NaiveDate,
    },

    /// Update a project
    Update {
        /// Project ID
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<NaiveDate>,

        /// Expected end date (YYYY-MM-DD)
        #[arg(long)]
        expected_end_date: Option<NaiveDate>,
    },

    /// Archive a project (one-way)
    Archive {
        /// Project ID
        id: i64,
    },
}
