//! Monthly report: every day of a month aggregated and priced.

use crate::core::calculator::day::aggregate_day;
use crate::core::calculator::pay::{Pay, compute_pay};
use crate::core::calendar::days_in_month;
use crate::errors::AppResult;
use crate::models::day_totals::DailyTotals;
use crate::models::month::YearMonth;
use crate::models::rates::MonthlyRate;
use crate::store::{KeyValueStore, TimeRecordStore};
use crate::utils::formatting::{format_currency, format_duration};
use chrono::NaiveDate;
use serde::Serialize;

/// One calendar day of a monthly report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyReport {
    pub date: NaiveDate,
    pub totals: DailyTotals,
}

impl DailyReport {
    pub fn normal_millis(&self) -> i64 {
        self.totals.normal_millis()
    }

    pub fn extra_millis(&self) -> i64 {
        self.totals.extra_millis()
    }

    pub fn total_millis(&self) -> i64 {
        self.totals.total_millis
    }

    pub fn is_worked(&self) -> bool {
        self.totals.total_millis > 0
    }

    pub fn pay(&self, rate: MonthlyRate) -> Pay {
        compute_pay(self.normal_millis(), self.extra_millis(), rate)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyReport {
    pub month: YearMonth,
    /// One row per calendar day, including days with nothing logged.
    pub daily: Vec<DailyReport>,
    pub rate: MonthlyRate,
    pub total_normal_millis: i64,
    pub total_extra_millis: i64,
}

impl MonthlyReport {
    pub fn total_millis(&self) -> i64 {
        self.total_normal_millis + self.total_extra_millis
    }

    pub fn has_data(&self) -> bool {
        self.total_millis() > 0
    }

    pub fn pay(&self) -> Pay {
        compute_pay(self.total_normal_millis, self.total_extra_millis, self.rate)
    }

    pub fn normal_pay(&self) -> f64 {
        self.pay().normal
    }

    pub fn extra_pay(&self) -> f64 {
        self.pay().extra
    }

    pub fn total_pay(&self) -> f64 {
        self.pay().total()
    }

    /// Days with logged time, in date order.
    pub fn worked_days(&self) -> impl Iterator<Item = &DailyReport> {
        self.daily.iter().filter(|d| d.is_worked())
    }

    pub fn worked_day_count(&self) -> usize {
        self.worked_days().count()
    }
}

/// Build the report for `month` priced with `rate`. Read-only.
pub fn build_monthly_report<S: KeyValueStore>(
    store: &TimeRecordStore<S>,
    month: YearMonth,
    rate: MonthlyRate,
) -> AppResult<MonthlyReport> {
    let mut daily = Vec::new();
    let mut total_normal_millis = 0;
    let mut total_extra_millis = 0;

    for day in days_in_month(month)? {
        let totals = aggregate_day(&store.day_entries(&day)?);

        total_normal_millis += totals.normal_millis();
        total_extra_millis += totals.extra_millis();

        daily.push(DailyReport {
            date: day.date,
            totals,
        });
    }

    Ok(MonthlyReport {
        month,
        daily,
        rate,
        total_normal_millis,
        total_extra_millis,
    })
}

/// Same as [`build_monthly_report`] with the rates stored for the month.
pub fn build_monthly_report_with_stored_rates<S: KeyValueStore>(
    store: &TimeRecordStore<S>,
    month: YearMonth,
) -> AppResult<MonthlyReport> {
    let rate = store.rates(month)?;
    build_monthly_report(store, month, rate)
}

/// Short text summary of a month, or `None` when there is nothing logged
/// or the month's rates are not configured yet.
pub fn monthly_summary(report: &MonthlyReport, currency: &str) -> Option<String> {
    if !report.has_data() || !report.rate.is_configured() {
        return None;
    }

    let pay = report.pay();
    Some(format!(
        "{}: {} normal, {} extra (total {})\nEarnings: normal {}, extra {} (total {})",
        report.month.label(),
        format_duration(report.total_normal_millis),
        format_duration(report.total_extra_millis),
        format_duration(report.total_millis()),
        format_currency(pay.normal, currency),
        format_currency(pay.extra, currency),
        format_currency(pay.total(), currency),
    ))
}
