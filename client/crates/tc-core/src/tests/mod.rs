mod models;

use crate::TempId;

use chrono::DateTime;

/// Temp ID valid over `[from, until)` epoch seconds.
pub(crate) fn temp_id(value: &str, from: i64, until: i64) -> TempId {
    TempId::new(
        value.to_string(),
        DateTime::from_timestamp(from, 0).unwrap(),
        DateTime::from_timestamp(until, 0).unwrap(),
    )
}

pub(crate) fn at(secs: i64) -> chrono::DateTime<chrono::Utc> {
    DateTime::from_timestamp(secs, 0).unwrap()
}
