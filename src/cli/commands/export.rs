use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{aggregate, project};
use crate::errors::{AppError, AppResult};
use crate::export::{
    RecordRow, Report, ReportKind, SlotRow, StatRow, ensure_writable, write_report,
};
use crate::import;
use std::path::Path;

/// Build the requested report from the input file and write it out.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        file,
        report,
        format,
        out,
        force,
        weekday,
        class,
    } = cmd
    {
        let out_path = Path::new(out);
        if !out_path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {out}"
            )));
        }

        ensure_writable(out_path, *force)?;

        let records = import::read_records(Path::new(file))?;

        let prepared = match report {
            ReportKind::Records => {
                Report::Records(records.iter().map(RecordRow::from).collect())
            }
            ReportKind::Stats => {
                let stats = aggregate(&records, &cfg.criteria);
                Report::Stats(stats.iter().map(StatRow::from).collect())
            }
            ReportKind::Occupancy => {
                let weekday = weekday.as_ref().ok_or_else(|| {
                    AppError::Export("--weekday is required for the occupancy report".to_string())
                })?;
                let cap = class
                    .as_ref()
                    .map(|c| cfg.class_capacity(c))
                    .unwrap_or(cfg.default_capacity);
                let slots = project(
                    &records,
                    class.as_deref(),
                    weekday,
                    cfg.work_start_minutes(),
                    cfg.work_end_minutes(),
                    cap,
                );
                Report::Occupancy(slots.iter().map(SlotRow::from).collect())
            }
        };

        write_report(&prepared, format, out_path)?;
    }
    Ok(())
}
