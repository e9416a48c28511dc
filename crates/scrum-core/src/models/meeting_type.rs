use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Meeting category. Wire representation uses the spaced display names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeetingType {
    #[serde(rename = "Sprint Planning")]
    SprintPlanning,
    #[serde(rename = "Daily Standup")]
    DailyStandup,
    #[serde(rename = "Sprint Review")]
    SprintReview,
    #[serde(rename = "Sprint Retrospective")]
    SprintRetrospective,
    #[serde(rename = "Stakeholder Meeting")]
    StakeholderMeeting,
}

impl MeetingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SprintPlanning => "Sprint Planning",
            Self::DailyStandup => "Daily Standup",
            Self::SprintReview => "Sprint Review",
            Self::SprintRetrospective => "Sprint Retrospective",
            Self::StakeholderMeeting => "Stakeholder Meeting",
        }
    }
}

impl FromStr for MeetingType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "Sprint Planning" => Ok(Self::SprintPlanning),
            "Daily Standup" => Ok(Self::DailyStandup),
            "Sprint Review" => Ok(Self::SprintReview),
            "Sprint Retrospective" => Ok(Self::SprintRetrospective),
            "Stakeholder Meeting" => Ok(Self::StakeholderMeeting),
            _ => Err(CoreError::InvalidMeetingType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for MeetingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
