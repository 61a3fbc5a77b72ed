use crate::ErrorLocation;

use std::panic::Location;
use std::result::Result as StdResult;

use thiserror::Error;

/// Boxed cause carried across collaborator boundaries.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },
}

/// Failure reported by a [`crate::TempIdSource`].
///
/// Both variants may or may not carry a concrete cause. Callers that need a
/// single error value substitute their own "unknown" error when it is absent.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Transport failure: {} {location}", describe(.cause))]
    Transport {
        cause: Option<BoxError>,
        location: ErrorLocation,
    },

    #[error("Unexpected status code {code}: {} {location}", describe(.cause))]
    StatusCode {
        code: u16,
        cause: Option<BoxError>,
        location: ErrorLocation,
    },
}

impl TransportError {
    #[track_caller]
    pub fn transport(cause: Option<BoxError>) -> Self {
        TransportError::Transport {
            cause,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Transport failure with a concrete cause.
    #[track_caller]
    pub fn caused_by<E>(cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let cause: BoxError = Box::new(cause);
        TransportError::Transport {
            cause: Some(cause),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn status_code(code: u16, cause: Option<BoxError>) -> Self {
        TransportError::StatusCode {
            code,
            cause,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { .. } => None,
            Self::StatusCode { code, .. } => Some(*code),
        }
    }

    pub fn cause(&self) -> Option<&BoxError> {
        match self {
            Self::Transport { cause, .. } | Self::StatusCode { cause, .. } => cause.as_ref(),
        }
    }

    /// Consume the error, yielding the underlying cause if one was reported.
    pub fn into_cause(self) -> Option<BoxError> {
        match self {
            Self::Transport { cause, .. } | Self::StatusCode { cause, .. } => cause,
        }
    }
}

fn describe(cause: &Option<BoxError>) -> String {
    cause
        .as_ref()
        .map(|e| e.to_string())
        .unwrap_or_else(|| String::from("no underlying error"))
}

/// Failure reported by a [`crate::TempIdStore`].
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage error: {message} {location}")]
    Backend {
        message: String,
        #[source]
        source: BoxError,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn backend<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        StoreError::Backend {
            message: source.to_string(),
            source: Box::new(source),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
pub type StoreResult<T> = StdResult<T, StoreError>;
