use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::project;
use crate::errors::AppResult;
use crate::import;
use crate::utils::colors::{RESET, color_for_occupancy};
use crate::utils::minutes_to_hhmm;
use crate::utils::table::{Column, Table};
use std::path::Path;

/// Hourly peak occupancy for one weekday.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Occupancy {
        file,
        weekday,
        class,
        capacity,
    } = cmd
    {
        let records = import::read_records(Path::new(file))?;

        let work_start = cfg.work_start_minutes();
        let work_end = cfg.work_end_minutes();
        let cap = match capacity {
            Some(c) => *c,
            None => class
                .as_ref()
                .map(|c| cfg.class_capacity(c))
                .unwrap_or(cfg.default_capacity),
        };

        let slots = project(
            &records,
            class.as_deref(),
            weekday,
            work_start,
            work_end,
            cap,
        );

        match class {
            Some(c) => println!(
                "{} / {} {}~{} (capacity {})",
                c,
                weekday,
                minutes_to_hhmm(work_start),
                minutes_to_hhmm(work_end),
                cap
            ),
            None => println!(
                "전체 / {} {}~{}",
                weekday,
                minutes_to_hhmm(work_start),
                minutes_to_hhmm(work_end)
            ),
        }

        let mut table = Table::new(vec![
            Column::new("시간", 6),
            Column::new("인원", 6),
            Column::new("비고", 10),
        ]);

        for slot in &slots {
            let color = if class.is_some() {
                color_for_occupancy(slot.count, cap)
            } else {
                RESET
            };
            table.add_row(vec![
                slot.time.clone(),
                format!("{color}{}{RESET}", slot.count),
                if slot.is_over {
                    format!("{color}정원초과{RESET}")
                } else {
                    "-".to_string()
                },
            ]);
        }

        print!("{}", table.render());
    }
    Ok(())
}
