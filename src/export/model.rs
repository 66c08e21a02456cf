// src/export/model.rs

use crate::core::calculator::pay::Pay;
use crate::core::report::{DailyReport, MonthlyReport};
use crate::models::month::YearMonth;
use crate::models::rates::MonthlyRate;
use crate::utils::date::format_iso;
use crate::utils::formatting::{format_decimal, format_hours_decimal, millis_to_hours};
use serde::Serialize;

/// CSV row for one worked day:
/// date, normal h, extra h, total h, normal pay, extra pay, total pay.
pub(crate) fn daily_row(day: &DailyReport, rate: MonthlyRate) -> Vec<String> {
    let pay = day.pay(rate);
    vec![
        format_iso(day.date),
        format_hours_decimal(day.normal_millis()),
        format_hours_decimal(day.extra_millis()),
        format_hours_decimal(day.total_millis()),
        format_decimal(pay.normal),
        format_decimal(pay.extra),
        format_decimal(pay.total()),
    ]
}

/// CSV totals row, same columns as [`daily_row`] with a label in place of the date.
pub(crate) fn totals_row(report: &MonthlyReport, label: &str) -> Vec<String> {
    let pay = report.pay();
    vec![
        label.to_string(),
        format_hours_decimal(report.total_normal_millis),
        format_hours_decimal(report.total_extra_millis),
        format_hours_decimal(report.total_millis()),
        format_decimal(pay.normal),
        format_decimal(pay.extra),
        format_decimal(pay.total()),
    ]
}

/// Flat structure for the JSON export.
#[derive(Serialize, Clone, Debug)]
pub struct ReportExport {
    pub month: YearMonth,
    pub rate: MonthlyRate,
    pub normal_hours: f64,
    pub extra_hours: f64,
    pub total_hours: f64,
    pub pay: PayExport,
    pub days: Vec<DayExport>,
}

#[derive(Serialize, Clone, Debug)]
pub struct DayExport {
    pub date: String,
    pub normal_hours: f64,
    pub extra_hours: f64,
    pub manual_extra_hours: f64,
    pub auto_extra_hours: f64,
    pub total_hours: f64,
    pub pay: PayExport,
}

#[derive(Serialize, Clone, Copy, Debug)]
pub struct PayExport {
    pub normal: f64,
    pub extra: f64,
    pub total: f64,
}

impl From<Pay> for PayExport {
    fn from(p: Pay) -> Self {
        Self {
            normal: p.normal,
            extra: p.extra,
            total: p.total(),
        }
    }
}

impl From<&MonthlyReport> for ReportExport {
    fn from(report: &MonthlyReport) -> Self {
        Self {
            month: report.month,
            rate: report.rate,
            normal_hours: millis_to_hours(report.total_normal_millis),
            extra_hours: millis_to_hours(report.total_extra_millis),
            total_hours: millis_to_hours(report.total_millis()),
            pay: report.pay().into(),
            days: report
                .worked_days()
                .map(|d| DayExport {
                    date: format_iso(d.date),
                    normal_hours: millis_to_hours(d.normal_millis()),
                    extra_hours: millis_to_hours(d.extra_millis()),
                    manual_extra_hours: millis_to_hours(d.totals.manual_extra_millis),
                    auto_extra_hours: millis_to_hours(d.totals.auto_extra_millis),
                    total_hours: millis_to_hours(d.total_millis()),
                    pay: d.pay(report.rate).into(),
                })
                .collect(),
        }
    }
}
