use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Role held by a user, derived server-side from membership tables.
/// The client treats it as an opaque attribute of the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Role {
    SuperAdmin,
    ScrumMaster,
    ProductOwner,
    #[default]
    Developer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "SuperAdmin",
            Self::ScrumMaster => "ScrumMaster",
            Self::ProductOwner => "ProductOwner",
            Self::Developer => "Developer",
        }
    }
}

impl FromStr for Role {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "SuperAdmin" => Ok(Self::SuperAdmin),
            "ScrumMaster" => Ok(Self::ScrumMaster),
            "ProductOwner" => Ok(Self::ProductOwner),
            "Developer" => Ok(Self::Developer),
            _ => Err(CoreError::InvalidRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
