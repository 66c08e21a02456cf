use crate::errors::AppResult;
use crate::models::month::YearMonth;
use crate::models::rates::{MonthlyRate, parse_rate_text};
use crate::models::time_entry::TimeEntry;
use crate::models::week_id::{DayKey, WeekId};
use crate::store::codec::{decode_entries, encode_entries};
use crate::store::keys::{extra_rate_key, intervals_key, normal_rate_key, ongoing_key};
use crate::store::{Edit, KeyValueStore};

/// Typed view over a [`KeyValueStore`] using the persisted key scheme.
pub struct TimeRecordStore<S: KeyValueStore> {
    kv: S,
}

impl<S: KeyValueStore> TimeRecordStore<S> {
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    pub fn kv(&self) -> &S {
        &self.kv
    }

    pub fn into_inner(self) -> S {
        self.kv
    }

    // ---------------------------
    // Day records
    // ---------------------------

    /// Entries stored for a day. Undecodable data reads as an empty day.
    pub fn entries(&self, week: WeekId, day_index: u8) -> AppResult<Vec<TimeEntry>> {
        let raw = self.kv.get(&intervals_key(week, day_index))?;
        Ok(raw.map(|r| decode_entries(&r)).unwrap_or_default())
    }

    pub fn day_entries(&self, day: &DayKey) -> AppResult<Vec<TimeEntry>> {
        self.entries(day.week_id, day.day_index)
    }

    /// Edit that replaces the whole record of a day.
    pub fn entries_edit(day: &DayKey, entries: &[TimeEntry]) -> AppResult<Edit> {
        Ok(Edit::Put(
            intervals_key(day.week_id, day.day_index),
            encode_entries(entries)?,
        ))
    }

    pub fn save_day_entries(&mut self, day: &DayKey, entries: &[TimeEntry]) -> AppResult<()> {
        let edit = Self::entries_edit(day, entries)?;
        self.kv.apply(vec![edit])
    }

    // ---------------------------
    // Running punch
    // ---------------------------

    /// Start of the running punch in epoch milliseconds, if any.
    pub fn ongoing_start(&self, day: &DayKey) -> AppResult<Option<i64>> {
        let raw = self.kv.get(&ongoing_key(day.week_id, day.day_index))?;
        let millis = raw.and_then(|r| r.trim().parse::<i64>().ok()).unwrap_or(0);
        Ok((millis > 0).then_some(millis))
    }

    pub fn set_ongoing_start(&mut self, day: &DayKey, millis: i64) -> AppResult<()> {
        self.kv
            .put(&ongoing_key(day.week_id, day.day_index), &millis.to_string())
    }

    pub fn clear_ongoing_edit(day: &DayKey) -> Edit {
        Edit::Remove(ongoing_key(day.week_id, day.day_index))
    }

    // ---------------------------
    // Monthly rates
    // ---------------------------

    /// Rates for a month; missing or unreadable values read as 0.
    pub fn rates(&self, month: YearMonth) -> AppResult<MonthlyRate> {
        let normal = self
            .kv
            .get(&normal_rate_key(month))?
            .map(|v| parse_rate_text(&v))
            .unwrap_or(0.0);
        let extra = self
            .kv
            .get(&extra_rate_key(month))?
            .map(|v| parse_rate_text(&v))
            .unwrap_or(0.0);
        Ok(MonthlyRate::new(normal, extra))
    }

    pub fn set_rates(&mut self, month: YearMonth, rate: MonthlyRate) -> AppResult<()> {
        self.kv.apply(vec![
            Edit::Put(normal_rate_key(month), rate.normal.to_string()),
            Edit::Put(extra_rate_key(month), rate.extra.to_string()),
        ])
    }

    /// Months that have at least one rate key stored, in order.
    pub fn months_with_rates(&self) -> AppResult<Vec<YearMonth>> {
        let mut months: Vec<YearMonth> = self
            .kv
            .keys_with_prefix("rate:")?
            .iter()
            .filter_map(|k| k.split(':').nth(1))
            .filter_map(|m| YearMonth::parse(m).ok())
            .collect();
        months.dedup();
        Ok(months)
    }

    // ---------------------------
    // Week maintenance
    // ---------------------------

    /// Remove entries and running punches for all seven days of a week.
    pub fn reset_week(&mut self, week: WeekId) -> AppResult<()> {
        let edits = (0..7u8)
            .flat_map(|i| {
                [
                    Edit::Remove(intervals_key(week, i)),
                    Edit::Remove(ongoing_key(week, i)),
                ]
            })
            .collect();
        self.kv.apply(edits)
    }

    pub fn commit(&mut self, edits: Vec<Edit>) -> AppResult<()> {
        self.kv.apply(edits)
    }
}
