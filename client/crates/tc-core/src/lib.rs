pub mod error;
pub mod filters;
pub mod models;
pub mod temp_id_source;
pub mod temp_id_store;
pub mod time_source;

#[cfg(test)]
mod tests;

pub use error::{BoxError, CoreError, Result, StoreError, StoreResult, TransportError};
pub use filters::{filter_valid, find_current};
pub use models::temp_id::TempId;
pub use models::temp_id_response::TempIdResponse;
pub use temp_id_source::TempIdSource;
pub use temp_id_store::{MemoryTempIdStore, TempIdStore};
pub use time_source::{ManualTimeSource, SystemTimeSource, TimeSource};

pub use error_location::ErrorLocation;

use std::panic::Location;

use chrono::{DateTime, Utc};

/// Convert epoch seconds (possibly fractional) into a UTC timestamp.
///
/// Rejects NaN, infinities, and values outside chrono's representable range.
#[track_caller]
pub fn parse_epoch_seconds(value: f64, field: &str) -> Result<DateTime<Utc>> {
    let caller = Location::caller();
    let invalid = || CoreError::Validation {
        message: format!("Invalid epoch timestamp: {}", value),
        field: Some(field.to_string()),
        location: ErrorLocation::from(caller),
    };

    if !value.is_finite() {
        return Err(invalid());
    }

    let millis = (value * 1000.0).round();
    if millis < i64::MIN as f64 || millis > i64::MAX as f64 {
        return Err(invalid());
    }

    DateTime::from_timestamp_millis(millis as i64).ok_or_else(invalid)
}
