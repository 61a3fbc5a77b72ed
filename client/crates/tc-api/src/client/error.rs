use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// Errors constructing the API client
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP client build error: {message} {location}")]
    Build {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    #[track_caller]
    pub fn from_build(err: reqwest::Error) -> Self {
        ApiError::Build {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
