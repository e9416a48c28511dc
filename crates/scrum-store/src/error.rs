use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use scrum_client::ClientError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("Session error: {message} {location}")]
    Session {
        message: String,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn session<S: Into<String>>(message: S) -> Self {
        StoreError::Session {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type StoreResult<T> = StdResult<T, StoreError>;
