use chrono::NaiveDateTime;
use clap::Subcommand;
use scrum_core::MeetingType;

#[derive(Subcommand)]
pub enum MeetingCommands {
    /// List meetings, bucketed into upcoming and past
    List,

    /// Create a new meeting
    Create {
        /// Meeting title
        #[arg(long)]
        title: String,

        /// Type: "Sprint Planning", "Daily Standup", "Sprint Review",
        /// "Sprint Retrospective", or "Stakeholder Meeting"
        #[arg(long = "type")]
        meeting_type: MeetingType,

        /// Date and time (YYYY-MM-DDTHH:MM:SS)
        #[arg(long)]
        date: NaiveDateTime,

        /// Duration in minutes
        #[arg(long)]
        duration: u32,

        /// Team ID
        #[arg(long)]
        team_id: i64,

        /// Attendee user IDs (repeatable)
        #[arg(long = "attendee")]
        attendee_ids: Vec<i64>,

        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Update a meeting (supply attendees to replace the whole set)
    Update {
        /// Meeting ID
        id: i64,

        #[arg(long)]
        title: Option<String>,

        /// See `create` for the accepted values
        #[arg(long = "type")]
        meeting_type: Option<MeetingType>,

        /// Date and time (YYYY-MM-DDTHH:MM:SS)
        #[arg(long)]
        date: Option<NaiveDateTime>,

        /// Duration in minutes
        #[arg(long)]
        duration: Option<u32>,

        /// Attendee user IDs (repeatable; replaces the set)
        #[arg(long = "attendee")]
        attendee_ids: Option<Vec<i64>>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete a meeting
    Delete {
        /// Meeting ID
        id: i64,
    },
}
