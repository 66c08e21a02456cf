// src/export/logic.rs

use crate::core::report::{MonthlyReport, build_monthly_report_with_stored_rates};
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::csv::render_csv;
use crate::export::fs_utils::{ensure_dir, ensure_writable, write_artifact};
use crate::export::json::render_json;
use crate::export::labels::ReportLabels;
use crate::export::pdf_export::render_pdf;
use crate::models::month::YearMonth;
use crate::store::{KeyValueStore, TimeRecordStore};
use chrono::{DateTime, NaiveDate, TimeZone};
use std::path::{Path, PathBuf};

/// How an export request ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Nothing logged in the month; no file was written.
    NoData { month: YearMonth },
    Written { path: PathBuf, bytes: usize },
}

/// `HorasLite_{yyyy-mm}_{epochMillis}.{ext}`
pub fn artifact_file_name(month: YearMonth, epoch_millis: i64, format: ExportFormat) -> String {
    format!(
        "HorasLite_{}_{}.{}",
        month.key(),
        epoch_millis,
        format.extension()
    )
}

/// Render an already built report to bytes.
pub fn render_report(
    report: &MonthlyReport,
    format: ExportFormat,
    labels: &ReportLabels,
    generated_on: NaiveDate,
) -> AppResult<Vec<u8>> {
    match format {
        ExportFormat::Csv => render_csv(report, labels),
        ExportFormat::Pdf => Ok(render_pdf(report, labels, generated_on)),
        ExportFormat::Json => render_json(report),
    }
}

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Build the report of `month`, render it and write it into `dir`.
    ///
    /// A month with no logged time is reported as
    /// [`ExportOutcome::NoData`] and leaves the filesystem untouched.
    pub fn export_month<S: KeyValueStore, Tz: TimeZone>(
        store: &TimeRecordStore<S>,
        month: YearMonth,
        format: ExportFormat,
        dir: &Path,
        labels: &ReportLabels,
        now: &DateTime<Tz>,
        force: bool,
    ) -> AppResult<ExportOutcome> {
        let report = build_monthly_report_with_stored_rates(store, month)?;

        if !report.has_data() {
            return Ok(ExportOutcome::NoData { month });
        }

        let bytes = render_report(&report, format, labels, now.date_naive())?;

        ensure_dir(dir)?;
        let path = dir.join(artifact_file_name(month, now.timestamp_millis(), format));
        ensure_writable(&path, force)?;
        write_artifact(&path, &bytes)?;

        Ok(ExportOutcome::Written {
            path,
            bytes: bytes.len(),
        })
    }
}
