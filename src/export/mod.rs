mod excel_time;
mod fs_utils;
mod json_csv;
mod model;
mod xlsx;

pub use fs_utils::ensure_writable;
pub use model::{RecordRow, Report, SlotRow, StatRow};

use crate::errors::AppResult;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for all export formats.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ReportKind {
    /// Normalized per-row records
    Records,
    /// Per-student aggregates with screening flags
    Stats,
    /// Hourly peak occupancy
    Occupancy,
}

/// Write a prepared report in the requested format.
pub fn write_report(report: &Report, format: &ExportFormat, path: &Path) -> AppResult<()> {
    match format {
        ExportFormat::Csv => json_csv::export_csv(report, path),
        ExportFormat::Json => json_csv::export_json(report, path),
        ExportFormat::Xlsx => xlsx::export_xlsx(report, path),
    }
}
