//! Start/stop punches.
//!
//! A running punch is kept as an epoch-millisecond marker on the day it was
//! started. Stopping it turns the elapsed time into a `punch` interval that
//! ends at the current minute of the day.

use crate::errors::{AppError, AppResult};
use crate::models::time_entry::{EntrySource, MILLIS_PER_MINUTE, TimeEntry};
use crate::models::week_id::DayKey;
use crate::store::{KeyValueStore, TimeRecordStore};
use crate::utils::time::minute_of_day;
use chrono::{DateTime, TimeZone};

/// Result of toggling a punch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PunchOutcome {
    Started { at_millis: i64 },
    Stopped { entry: TimeEntry },
}

pub struct PunchLogic;

impl PunchLogic {
    pub fn start<S: KeyValueStore>(
        store: &mut TimeRecordStore<S>,
        day: &DayKey,
        now_millis: i64,
    ) -> AppResult<()> {
        if store.ongoing_start(day)?.is_some() {
            return Err(AppError::PunchAlreadyRunning(day.date.to_string()));
        }
        store.set_ongoing_start(day, now_millis)
    }

    /// Close the running punch of `day`. The new interval and the removal of
    /// the marker are committed together.
    pub fn stop<S: KeyValueStore, Tz: TimeZone>(
        store: &mut TimeRecordStore<S>,
        day: &DayKey,
        now: &DateTime<Tz>,
    ) -> AppResult<TimeEntry> {
        let started = store
            .ongoing_start(day)?
            .ok_or_else(|| AppError::NoOngoingPunch(day.date.to_string()))?;

        let entry = close_punch(started, now);

        let mut entries = store.day_entries(day)?;
        entries.push(entry.clone());

        store.commit(vec![
            TimeRecordStore::<S>::entries_edit(day, &entries)?,
            TimeRecordStore::<S>::clear_ongoing_edit(day),
        ])?;

        Ok(entry)
    }

    /// Start when idle, stop when running.
    pub fn toggle<S: KeyValueStore, Tz: TimeZone>(
        store: &mut TimeRecordStore<S>,
        day: &DayKey,
        now: &DateTime<Tz>,
    ) -> AppResult<PunchOutcome> {
        if store.ongoing_start(day)?.is_some() {
            let entry = Self::stop(store, day, now)?;
            Ok(PunchOutcome::Stopped { entry })
        } else {
            let at_millis = now.timestamp_millis();
            Self::start(store, day, at_millis)?;
            Ok(PunchOutcome::Started { at_millis })
        }
    }
}

/// Interval for a punch started at `started_millis` and stopped at `now`.
///
/// The end is the minute of the day of `now`; the start is the end minus the
/// whole minutes elapsed, clamped to `0..=end`.
pub fn close_punch<Tz: TimeZone>(started_millis: i64, now: &DateTime<Tz>) -> TimeEntry {
    let end = minute_of_day(now.time());
    let elapsed = (now.timestamp_millis() - started_millis) / MILLIS_PER_MINUTE;
    let start = (end - elapsed).clamp(0, end);

    TimeEntry::interval(start, end, false, EntrySource::Punch)
}
