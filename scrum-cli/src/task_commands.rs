use clap::Subcommand;
use scrum_core::ItemStatus;

#[derive(Subcommand)]
pub enum TaskCommands {
    /// List all tasks
    List,

    /// Create a new task under a backlog item
    Create {
        /// Task description
        #[arg(long)]
        description: String,

        /// Estimation points
        #[arg(long, default_value_t = 0)]
        points: u32,

        /// Status: ToDo, InProgress, or Done
        #[arg(long, default_value = "ToDo")]
        status: ItemStatus,

        /// Parent backlog item ID
        #[arg(long)]
        item_backlog_id: i64,

        /// Assignee user ID (must hold the Developer role)
        #[arg(long)]
        assigned_to_id: Option<i64>,
    },

    /// Update a task
    Update {
        /// Task ID
        id: i64,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        points: Option<u32>,

        /// Status: ToDo, InProgress, or Done
        #[arg(long)]
        status: Option<ItemStatus>,

        /// Assignee user ID (must hold the Developer role)
        #[arg(long)]
        assigned_to_id: Option<i64>,
    },
}
