#![allow(dead_code)]

use chrono::{DateTime, Utc};
use tc_core::TempId;

pub fn at(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap()
}

/// Creates a temp ID valid over `[from, until)` epoch seconds
pub fn create_test_temp_id(value: &str, from: i64, until: i64) -> TempId {
    TempId::new(value.to_string(), at(from), at(until))
}
