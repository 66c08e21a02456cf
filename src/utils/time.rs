//! Time utilities: parsing HH:MM into minutes of the day and back.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

/// Parse `HH:MM` into minutes since midnight.
pub fn parse_minute_of_day(t: &str) -> AppResult<i64> {
    let time = NaiveTime::parse_from_str(t.trim(), "%H:%M")
        .map_err(|_| AppError::InvalidTime(t.to_string()))?;
    Ok(minute_of_day(time))
}

pub fn minute_of_day(time: NaiveTime) -> i64 {
    (time.hour() * 60 + time.minute()) as i64
}

pub fn format_minute_of_day(mins: i64) -> String {
    format!("{:02}:{:02}", mins / 60, mins % 60)
}
