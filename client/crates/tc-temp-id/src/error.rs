use tc_core::{BoxError, ErrorLocation, StoreError, TransportError};

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TempIdError {
    #[error("Temp ID fetch failed: {source} {location}")]
    Transport {
        #[source]
        source: BoxError,
        location: ErrorLocation,
    },

    /// The source failed without reporting why.
    #[error("Unknown error{} {location}", describe_status(.status))]
    Unknown {
        status: Option<u16>,
        location: ErrorLocation,
    },

    #[error("Temp ID store error: {source} {location}")]
    Store {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },
}

impl TempIdError {
    /// Surface the underlying cause of a transport failure, or `Unknown`
    /// when the source did not report one.
    #[track_caller]
    pub fn from_transport(error: TransportError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        let status = error.status();

        match error.into_cause() {
            Some(source) => Self::Transport { source, location },
            None => Self::Unknown { status, location },
        }
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport { .. } | Self::Unknown { .. } => true,
            Self::Store { .. } => false,
        }
    }
}

fn describe_status(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!(" (status {})", code),
        None => String::new(),
    }
}

impl From<StoreError> for TempIdError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, TempIdError>;
