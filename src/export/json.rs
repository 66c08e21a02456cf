use crate::core::report::MonthlyReport;
use crate::errors::AppResult;
use crate::export::model::ReportExport;

/// Pretty-printed JSON of the month: totals, pay and worked days.
pub fn render_json(report: &MonthlyReport) -> AppResult<Vec<u8>> {
    let data = ReportExport::from(report);
    Ok(serde_json::to_vec_pretty(&data)?)
}
