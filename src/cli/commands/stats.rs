use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate;
use crate::errors::AppResult;
use crate::import;
use crate::utils::colors::{RESET, color_for_screening};
use crate::utils::mins_to_korean;
use crate::utils::table::{Column, Table};
use std::path::Path;

/// Per-student care statistics with screening flags.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { file, class } = cmd {
        let records = import::read_records(Path::new(file))?;
        let stats = aggregate(&records, &cfg.criteria);

        let filtered: Vec<_> = stats
            .iter()
            .filter(|s| class.as_ref().is_none_or(|c| &s.class_name == c))
            .collect();

        let mut table = Table::new(vec![
            Column::new("이름", 12),
            Column::new("반", 8),
            Column::new("일수", 4),
            Column::new("총 돌봄시간", 14),
            Column::new("평균 체류", 12),
            Column::new("선별", 4),
        ]);

        let mut targets = 0;
        for stat in &filtered {
            let color = color_for_screening(stat.is_screening_target);
            if stat.is_screening_target {
                targets += 1;
            }
            table.add_row(vec![
                format!("{color}{}{RESET}", stat.name),
                stat.class_name.clone(),
                stat.days_count.to_string(),
                mins_to_korean(stat.total_minutes),
                mins_to_korean(stat.avg_stay),
                if stat.is_screening_target {
                    format!("{color}대상{RESET}")
                } else {
                    "-".to_string()
                },
            ]);
        }

        print!("{}", table.render());
        println!(
            "{} students, {} screening target(s), {} criteria applied",
            filtered.len(),
            targets,
            cfg.criteria.len()
        );
    }
    Ok(())
}
