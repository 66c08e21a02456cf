// src/export/mod.rs

mod csv;
mod fs_utils;
mod json;
pub mod labels;
pub mod logic;
mod model;
mod pdf;
pub mod pdf_export;

pub use self::csv::render_csv;
pub use json::render_json;
pub use labels::ReportLabels;
pub use logic::{ExportLogic, ExportOutcome, artifact_file_name, render_report};
pub use model::ReportExport;
pub use pdf_export::render_pdf;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for exports.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Pdf,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Json => "JSON",
            ExportFormat::Pdf => "PDF",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Pdf => "pdf",
        }
    }
}
