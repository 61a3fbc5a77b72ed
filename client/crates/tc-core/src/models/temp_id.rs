use crate::{CoreError, Result as CoreResult, TempIdResponse, parse_epoch_seconds};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// A rotating anonymous identifier and the window in which it may be broadcast.
///
/// `valid_until` is exclusive. `valid_from < valid_until` is expected of the
/// issuing server but not enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TempId {
    pub temp_id: String,
    pub valid_from: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
}

impl TempId {
    pub fn new(temp_id: String, valid_from: DateTime<Utc>, valid_until: DateTime<Utc>) -> Self {
        Self {
            temp_id,
            valid_from,
            valid_until,
        }
    }

    /// Not yet expired at `now`.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.valid_until
    }

    /// The validity window contains `now`.
    pub fn is_current_at(&self, now: DateTime<Utc>) -> bool {
        self.valid_from <= now && now < self.valid_until
    }
}

impl TryFrom<TempIdResponse> for TempId {
    type Error = CoreError;

    #[track_caller]
    fn try_from(response: TempIdResponse) -> CoreResult<Self> {
        if response.temp_id.trim().is_empty() {
            return Err(CoreError::Validation {
                message: String::from("Temp ID must not be empty"),
                field: Some(String::from("tempID")),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(TempId {
            valid_from: parse_epoch_seconds(response.valid_from, "validFrom")?,
            valid_until: parse_epoch_seconds(response.valid_to, "validTo")?,
            temp_id: response.temp_id,
        })
    }
}
