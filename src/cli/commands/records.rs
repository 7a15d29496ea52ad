use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::import;
use crate::utils::colors::colorize_optional;
use crate::utils::table::{Column, Table};
use std::path::Path;

/// Show the normalized per-row records, exactly as the downstream
/// statistics will see them.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Records { file, limit } = cmd {
        let records = import::read_records(Path::new(file))?;
        let shown = (*limit).unwrap_or(records.len()).min(records.len());

        let mut table = Table::new(vec![
            Column::new("ID", 4),
            Column::new("이름", 12),
            Column::new("반", 8),
            Column::new("요일", 10),
            Column::new("등원", 6),
            Column::new("하원", 6),
            Column::new("외출", 12),
            Column::new("돌봄시간", 12),
        ]);

        for rec in &records[..shown] {
            table.add_row(vec![
                rec.id.to_string(),
                rec.student_name.clone(),
                rec.class_name.clone(),
                rec.day_of_week.clone(),
                rec.start_time.clone(),
                rec.end_time.clone(),
                colorize_optional(&rec.outing_time),
                colorize_optional(&rec.care_str()),
            ]);
        }

        print!("{}", table.render());
        println!("{} of {} records", shown, records.len());
    }
    Ok(())
}
