use crate::core::report::MonthlyReport;
use crate::errors::{AppError, AppResult};
use crate::export::labels::ReportLabels;
use crate::export::model::{daily_row, totals_row};
use csv::WriterBuilder;

fn writer(out: Vec<u8>) -> csv::Writer<Vec<u8>> {
    WriterBuilder::new()
        .delimiter(b';')
        .flexible(true)
        .from_writer(out)
}

fn into_bytes(wtr: csv::Writer<Vec<u8>>) -> AppResult<Vec<u8>> {
    wtr.into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {}", e.error())))
}

/// Render the month as `;`-separated CSV: header, one row per worked day,
/// a blank line, then the totals row.
pub fn render_csv(report: &MonthlyReport, labels: &ReportLabels) -> AppResult<Vec<u8>> {
    let mut body = writer(Vec::new());

    body.write_record(&labels.csv_header)?;
    for day in report.worked_days() {
        body.write_record(daily_row(day, report.rate))?;
    }

    let mut out = into_bytes(body)?;
    out.push(b'\n');

    let mut totals = writer(out);
    totals.write_record(totals_row(report, &labels.csv_totals_label))?;

    into_bytes(totals)
}
