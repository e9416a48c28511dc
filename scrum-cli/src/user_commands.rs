use scrum_core::Role;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum UserCommands {
    /// List all users
    List,

    /// Create a new user
    Create {
        /// Display name
        #[arg(long)]
        name: String,

        /// E-mail address
        #[arg(long)]
        email: String,

        /// Initial password (write-only, never echoed back)
        #[arg(long)]
        password: Option<String>,

        /// Role: SuperAdmin, ScrumMaster, ProductOwner, or Developer
        #[arg(long)]
        role: Option<Role>,
    },

    /// Update a user
    Update {
        /// User ID
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        password: Option<String>,

        #[arg(long)]
        role: Option<Role>,
    },

    /// Delete a user
    Delete {
        /// User ID
        id: i64,
    },
}
