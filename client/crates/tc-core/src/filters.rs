use crate::TempId;

use chrono::{DateTime, Utc};

/// Identifiers that have not expired at `now`, in their original order.
pub fn filter_valid(temp_ids: &[TempId], now: DateTime<Utc>) -> Vec<TempId> {
    temp_ids
        .iter()
        .filter(|temp_id| temp_id.is_valid_at(now))
        .cloned()
        .collect()
}

/// First identifier whose window contains `now`.
///
/// Overlapping windows are not expected from the server; if they occur the
/// earliest entry in `temp_ids` wins.
pub fn find_current(temp_ids: &[TempId], now: DateTime<Utc>) -> Option<&TempId> {
    temp_ids.iter().find(|temp_id| temp_id.is_current_at(now))
}
