use crate::errors::{AppError, AppResult};
use crate::export::{Report, notify_export_success};
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(report: &Report, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = match report {
        Report::Records(rows) => serde_json::to_string_pretty(rows),
        Report::Stats(rows) => serde_json::to_string_pretty(rows),
        Report::Occupancy(rows) => serde_json::to_string_pretty(rows),
    }
    .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV (header included via serde).
pub(crate) fn export_csv(report: &Report, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;

    match report {
        Report::Records(rows) => {
            for row in rows {
                wtr.serialize(row)?;
            }
        }
        Report::Stats(rows) => {
            for row in rows {
                wtr.serialize(row)?;
            }
        }
        Report::Occupancy(rows) => {
            for row in rows {
                wtr.serialize(row)?;
            }
        }
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
