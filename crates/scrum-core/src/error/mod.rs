use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid role: {value} {location}")]
    InvalidRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid sprint status: {value} {location}")]
    InvalidSprintStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid item status: {value} {location}")]
    InvalidItemStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid meeting type: {value} {location}")]
    InvalidMeetingType {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
