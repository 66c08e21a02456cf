use chrono::{Datelike, NaiveDate};
use std::fmt;

/// Storage identifier of a Monday-first week: ISO week-year and week number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekId {
    pub year: i32,
    pub week: u32,
}

impl WeekId {
    pub fn for_date(date: NaiveDate) -> Self {
        let iso = date.iso_week();
        Self {
            year: iso.year(),
            week: iso.week(),
        }
    }
}

impl fmt::Display for WeekId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.year, self.week)
    }
}

/// Address of one stored day: the week it belongs to and its position
/// in that week (0 = Monday .. 6 = Sunday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayKey {
    pub date: NaiveDate,
    pub week_id: WeekId,
    pub day_index: u8,
}

impl DayKey {
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            date,
            week_id: WeekId::for_date(date),
            day_index: date.weekday().num_days_from_monday() as u8,
        }
    }
}
