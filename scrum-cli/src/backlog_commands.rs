use clap::Subcommand;
use scrum_core::ItemStatus;

#[derive(Subcommand)]
pub enum BacklogCommands {
    /// List backlog items, optionally filtered by status
    List {
        /// Status: ToDo, InProgress, or Done
        #[arg(long)]
        status: Option<ItemStatus>,
    },

    /// Create a new backlog item
    Create {
        /// Title
        #[arg(long)]
        title: String,

        /// Description
        #[arg(long, default_value = "")]
        description: String,

        /// Priority (positive, 1 = highest urgency)
        #[arg(long, default_value_t = 1)]
        priority: u32,

        /// Estimation in hours
        #[arg(long, default_value_t = 0)]
        estimation: u32,

        /// Status: ToDo, InProgress, or Done
        #[arg(long, default_value = "ToDo")]
        status: ItemStatus,

        /// Project ID
        #[arg(long)]
        project_id: i64,

        /// Sprint ID (optional)
        #[arg(long)]
        sprint_id: Option<i64>,

        /// Assignee user ID (optional)
        #[arg(long)]
        assigned_to_id: Option<i64>,
    },

    /// Update a backlog item
    Update {
        /// Backlog item ID
        id: i64,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        priority: Option<u32>,

        #[arg(long)]
        estimation: Option<u32>,

        /// Status: ToDo, InProgress, or Done
        #[arg(long)]
        status: Option<ItemStatus>,

        #[arg(long)]
        sprint_id: Option<i64>,

        #[arg(long)]
        assigned_to_id: Option<i64>,
    },

    /// Delete a backlog item
    Delete {
        /// Backlog item ID
        id: i64,
    },

    /// Comment on a backlog item as the logged-in user
    Comment {
        /// Backlog item ID
        id: i64,

        /// Comment text
        text: String,
    },
}
