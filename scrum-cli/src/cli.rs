use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "scrum")]
#[command(about = "Terminal client for the Scrum manager backend")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Server URL (overrides configuration)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
