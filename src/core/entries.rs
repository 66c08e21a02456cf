//! Editing of day records.
//!
//! Every operation loads the full record of the day, builds a new one and
//! writes it back whole.

use crate::errors::{AppError, AppResult};
use crate::models::time_entry::{EntrySource, TimeEntry};
use crate::models::week_id::DayKey;
use crate::store::{KeyValueStore, TimeRecordStore};
use crate::utils::time::format_minute_of_day;

/// Upper bound for a minute of the day (24:00).
const MINUTES_PER_DAY: i64 = 24 * 60;

pub struct EntryLogic;

impl EntryLogic {
    /// Append a manual interval. `end` must be after `start`.
    pub fn add_interval<S: KeyValueStore>(
        store: &mut TimeRecordStore<S>,
        day: &DayKey,
        start: i64,
        end: i64,
        extra: bool,
    ) -> AppResult<TimeEntry> {
        for minute in [start, end] {
            if !(0..=MINUTES_PER_DAY).contains(&minute) {
                return Err(AppError::MinuteOutOfRange(minute));
            }
        }
        if end <= start {
            return Err(AppError::InvalidInterval {
                start: format_minute_of_day(start),
                end: format_minute_of_day(end),
            });
        }

        let entry = TimeEntry::interval(start, end, extra, EntrySource::Manual);
        Self::append(store, day, entry.clone())?;
        Ok(entry)
    }

    /// Append a quantity block of `minutes` (> 0).
    pub fn add_quantity<S: KeyValueStore>(
        store: &mut TimeRecordStore<S>,
        day: &DayKey,
        minutes: i64,
        extra: bool,
    ) -> AppResult<TimeEntry> {
        if minutes <= 0 {
            return Err(AppError::InvalidQuantity(
                "total duration must be greater than zero".into(),
            ));
        }

        let entry = TimeEntry::quantity(minutes, extra);
        Self::append(store, day, entry.clone())?;
        Ok(entry)
    }

    /// Flip the manual-extra flag of entry `index`, returning the new entry.
    pub fn toggle_extra<S: KeyValueStore>(
        store: &mut TimeRecordStore<S>,
        day: &DayKey,
        index: usize,
    ) -> AppResult<TimeEntry> {
        let entries = store.day_entries(day)?;
        let current = entries.get(index).ok_or(AppError::InvalidEntryIndex(index))?;
        let toggled = current.with_manual_extra(!current.manual_extra);

        let updated: Vec<TimeEntry> = entries
            .iter()
            .enumerate()
            .map(|(i, e)| if i == index { toggled.clone() } else { e.clone() })
            .collect();

        store.save_day_entries(day, &updated)?;
        Ok(toggled)
    }

    /// Remove entry `index`, returning it.
    pub fn delete<S: KeyValueStore>(
        store: &mut TimeRecordStore<S>,
        day: &DayKey,
        index: usize,
    ) -> AppResult<TimeEntry> {
        let mut entries = store.day_entries(day)?;
        if index >= entries.len() {
            return Err(AppError::InvalidEntryIndex(index));
        }

        let removed = entries.remove(index);
        store.save_day_entries(day, &entries)?;
        Ok(removed)
    }

    pub(crate) fn append<S: KeyValueStore>(
        store: &mut TimeRecordStore<S>,
        day: &DayKey,
        entry: TimeEntry,
    ) -> AppResult<()> {
        let mut entries = store.day_entries(day)?;
        entries.push(entry);
        store.save_day_entries(day, &entries)
    }
}

/// Parse the hours/minutes pair of a quantity entry into total minutes.
///
/// Negative hours count as zero; minutes must be in `0..60`.
pub fn quantity_minutes(hours: i64, minutes: i64) -> AppResult<i64> {
    if !(0..60).contains(&minutes) {
        return Err(AppError::InvalidQuantity(format!(
            "minutes must be between 0 and 59, got {minutes}"
        )));
    }

    let total = hours.max(0) * 60 + minutes;
    if total <= 0 {
        return Err(AppError::InvalidQuantity(
            "total duration must be greater than zero".into(),
        ));
    }
    Ok(total)
}
