//! Week and month arithmetic.
//!
//! Weeks start on Monday and are addressed either by an offset relative to
//! the week containing `today` (0 = this week, -1 = last week, ...) or by
//! their ISO [`WeekId`]. Every function takes `today` explicitly.

use crate::errors::{AppError, AppResult};
use crate::models::month::YearMonth;
use crate::models::week_id::{DayKey, WeekId};
use chrono::{Datelike, Days, NaiveDate, TimeDelta};

pub const DAYS_PER_WEEK: i64 = 7;

/// Monday of the week containing `date`.
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    date - Days::new(date.weekday().num_days_from_monday() as u64)
}

/// Monday of the week `offset` weeks away from the week of `today`.
pub fn week_monday(today: NaiveDate, offset: i64) -> AppResult<NaiveDate> {
    TimeDelta::try_days(offset.saturating_mul(DAYS_PER_WEEK))
        .and_then(|delta| monday_of(today).checked_add_signed(delta))
        .ok_or_else(|| AppError::InvalidDate(format!("week offset {offset} is out of range")))
}

pub fn week_id(today: NaiveDate, offset: i64) -> AppResult<WeekId> {
    Ok(WeekId::for_date(week_monday(today, offset)?))
}

/// Monday and Sunday of the week, both inclusive.
pub fn week_label(today: NaiveDate, offset: i64) -> AppResult<(NaiveDate, NaiveDate)> {
    let monday = week_monday(today, offset)?;
    Ok((monday, monday + Days::new(6)))
}

/// The seven days of the week, Monday first.
pub fn week_days(today: NaiveDate, offset: i64) -> AppResult<Vec<DayKey>> {
    let monday = week_monday(today, offset)?;
    Ok(monday
        .iter_days()
        .take(DAYS_PER_WEEK as usize)
        .map(DayKey::for_date)
        .collect())
}

/// Months touched by the week, in day order and without repeats.
pub fn months_spanned_by_week(today: NaiveDate, offset: i64) -> AppResult<Vec<YearMonth>> {
    let mut months: Vec<YearMonth> = Vec::with_capacity(2);
    for day in week_days(today, offset)? {
        let m = YearMonth::of(day.date);
        if months.last() != Some(&m) {
            months.push(m);
        }
    }
    Ok(months)
}

/// Every calendar day of `month` with the storage address of that day.
pub fn days_in_month(month: YearMonth) -> AppResult<Vec<DayKey>> {
    let first = month.first_day()?;
    Ok(first
        .iter_days()
        .take_while(|d| d.month() == month.month)
        .map(DayKey::for_date)
        .collect())
}

/// Offset of the week containing `date`, relative to the week of `today`.
pub fn week_offset_for(today: NaiveDate, date: NaiveDate) -> i64 {
    let days = (monday_of(date) - monday_of(today)).num_days();
    days.div_euclid(DAYS_PER_WEEK)
}
