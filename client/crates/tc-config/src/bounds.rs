use crate::{ConfigError, ConfigErrorResult};

use std::fmt::Display;
use std::ops::RangeInclusive;

#[track_caller]
pub(crate) fn check_range<T>(
    key: &'static str,
    value: T,
    range: &RangeInclusive<T>,
) -> ConfigErrorResult<()>
where
    T: PartialOrd + Display,
{
    if range.contains(&value) {
        return Ok(());
    }

    Err(ConfigError::invalid(
        key,
        &value,
        format!("must be within {}..={}", range.start(), range.end()),
    ))
}
