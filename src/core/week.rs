use crate::core::calculator::day::aggregate_day;
use crate::core::calculator::pay::{Pay, compute_pay};
use crate::core::calendar::{months_spanned_by_week, week_days, week_label};
use crate::errors::AppResult;
use crate::models::day_totals::DailyTotals;
use crate::models::month::YearMonth;
use crate::models::rates::MonthlyRate;
use crate::models::time_entry::TimeEntry;
use crate::models::week_id::{DayKey, WeekId};
use crate::store::{KeyValueStore, TimeRecordStore};
use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct DayView {
    pub key: DayKey,
    pub entries: Vec<TimeEntry>,
    pub totals: DailyTotals,
    /// Start of a running punch, epoch milliseconds.
    pub ongoing_since: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct WeekSummary {
    pub offset: i64,
    pub week_id: WeekId,
    pub monday: NaiveDate,
    pub sunday: NaiveDate,
    pub days: Vec<DayView>,
    pub totals: DailyTotals,
    pub months: Vec<YearMonth>,
    /// Rates of the first month the week touches.
    pub rate: MonthlyRate,
}

impl WeekSummary {
    /// Weekly earnings, `None` while the rates are not configured.
    pub fn pay(&self) -> Option<Pay> {
        self.rate.is_configured().then(|| {
            compute_pay(
                self.totals.normal_millis(),
                self.totals.extra_millis(),
                self.rate,
            )
        })
    }
}

pub fn week_summary<S: KeyValueStore>(
    store: &TimeRecordStore<S>,
    today: NaiveDate,
    offset: i64,
) -> AppResult<WeekSummary> {
    let (monday, sunday) = week_label(today, offset)?;
    let months = months_spanned_by_week(today, offset)?;

    let mut days = Vec::with_capacity(7);
    for key in week_days(today, offset)? {
        let entries = store.day_entries(&key)?;
        let totals = aggregate_day(&entries);
        let ongoing_since = store.ongoing_start(&key)?;
        days.push(DayView {
            key,
            entries,
            totals,
            ongoing_since,
        });
    }

    let totals = days.iter().map(|d| d.totals).sum();
    let rate = match months.first() {
        Some(m) => store.rates(*m)?,
        None => MonthlyRate::default(),
    };

    Ok(WeekSummary {
        offset,
        week_id: WeekId::for_date(monday),
        monday,
        sunday,
        days,
        totals,
        months,
        rate,
    })
}
