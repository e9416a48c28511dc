use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use reqwest::StatusCode;
use thiserror::Error;

/// Typed failures of the Remote Access Layer.
///
/// Validation, NotFound, and Authentication map from the backend's HTTP
/// status; Network covers transport failures, unexpected statuses, and
/// non-JSON responses.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("Authentication failed: {message} {location}")]
    Authentication {
        message: String,
        location: ErrorLocation,
    },

    #[error("Network error: {message} {location}")]
    Network {
        message: String,
        location: ErrorLocation,
    },
}

impl ClientError {
    #[track_caller]
    pub fn network<S: Into<String>>(message: S) -> Self {
        ClientError::Network {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Map a non-success status and its extracted message to the taxonomy.
    #[track_caller]
    pub fn from_status(status: StatusCode, message: String) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match status {
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                ClientError::Validation { message, location }
            }
            StatusCode::UNAUTHORIZED => ClientError::Authentication { message, location },
            StatusCode::NOT_FOUND => ClientError::NotFound { message, location },
            _ => ClientError::Network { message, location },
        }
    }

    pub fn is_authentication(&self) -> bool {
        matches!(self, ClientError::Authentication { .. })
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::network(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::network(format!("unexpected response shape: {err}"))
    }
}

pub type Result<T> = StdResult<T, ClientError>;
