//! Cross-row aggregation: per-(student, class) totals, day counts, rounded
//! averages, and screening-criteria evaluation.

use crate::models::{ScreeningCriterion, StudentRecord, StudentStat};
use std::collections::HashMap;

/// Group records by student and class, accumulate care minutes, and flag
/// screening targets. Output preserves first-seen group order.
///
/// The grouping key is a structured (name, class) pair; names containing
/// delimiter characters cannot collide with each other.
pub fn aggregate(records: &[StudentRecord], criteria: &[ScreeningCriterion]) -> Vec<StudentStat> {
    let mut index: HashMap<(String, String), usize> = HashMap::new();
    let mut groups: Vec<(String, String, i64, i64)> = Vec::new();

    for rec in records {
        let key = (rec.student_name.clone(), rec.class_name.clone());
        match index.get(&key).copied() {
            Some(i) => {
                groups[i].2 += rec.actual_care_minutes;
                groups[i].3 += 1;
            }
            None => {
                index.insert(key, groups.len());
                groups.push((
                    rec.student_name.clone(),
                    rec.class_name.clone(),
                    rec.actual_care_minutes,
                    1,
                ));
            }
        }
    }

    groups
        .into_iter()
        .map(|(name, class_name, total_minutes, days_count)| {
            let avg_stay = (total_minutes as f64 / days_count as f64).round() as i64;
            let is_screening_target = criteria.iter().any(|c| c.matches(avg_stay, days_count));
            StudentStat {
                name,
                class_name,
                total_minutes,
                days_count,
                avg_stay,
                is_screening_target,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CriterionKind, CriterionOp};

    fn record(name: &str, class: &str, minutes: i64) -> StudentRecord {
        StudentRecord {
            id: 0,
            student_name: name.to_string(),
            class_name: class.to_string(),
            day_of_week: "월".to_string(),
            start_time: "13:00".to_string(),
            end_time: "17:00".to_string(),
            outing_time: String::new(),
            actual_care_minutes: minutes,
        }
    }

    fn criterion(kind: CriterionKind, op: CriterionOp, value: i64) -> ScreeningCriterion {
        ScreeningCriterion {
            id: 1,
            kind,
            op,
            value,
        }
    }

    #[test]
    fn totals_and_average_per_group() {
        let records = vec![
            record("김민준", "1반", 240),
            record("김민준", "1반", 180),
            record("이서연", "1반", 100),
        ];
        let stats = aggregate(&records, &[]);

        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].name, "김민준");
        assert_eq!(stats[0].total_minutes, 420);
        assert_eq!(stats[0].days_count, 2);
        assert_eq!(stats[0].avg_stay, 210);
        assert_eq!(stats[1].total_minutes, 100);
    }

    #[test]
    fn average_is_rounded() {
        let records = vec![
            record("김민준", "1반", 100),
            record("김민준", "1반", 101),
        ];
        let stats = aggregate(&records, &[]);
        // 201 / 2 = 100.5 rounds up
        assert_eq!(stats[0].avg_stay, 101);
    }

    #[test]
    fn same_name_different_class_stays_separate() {
        let records = vec![
            record("김민준", "1반", 240),
            record("김민준", "2반", 120),
        ];
        let stats = aggregate(&records, &[]);
        assert_eq!(stats.len(), 2);
    }

    #[test]
    fn first_seen_order_is_preserved() {
        let records = vec![
            record("박지호", "2반", 60),
            record("김민준", "1반", 60),
            record("박지호", "2반", 60),
        ];
        let stats = aggregate(&records, &[]);
        assert_eq!(stats[0].name, "박지호");
        assert_eq!(stats[1].name, "김민준");
    }

    #[test]
    fn average_stay_screening() {
        let records = vec![record("김민준", "1반", 50)];

        let less = vec![criterion(
            CriterionKind::AverageStayTime,
            CriterionOp::Less,
            60,
        )];
        assert!(aggregate(&records, &less)[0].is_screening_target);

        let greater = vec![criterion(
            CriterionKind::AverageStayTime,
            CriterionOp::Greater,
            60,
        )];
        assert!(!aggregate(&records, &greater)[0].is_screening_target);
    }

    #[test]
    fn absence_days_comparison_is_inverted() {
        // Two attended days; `greater 3` flags fewer-than-threshold days,
        // `less 1` flags more-than-threshold days.
        let records = vec![
            record("김민준", "1반", 240),
            record("김민준", "1반", 240),
        ];

        let greater = vec![criterion(CriterionKind::AbsenceDays, CriterionOp::Greater, 3)];
        assert!(aggregate(&records, &greater)[0].is_screening_target);

        let less = vec![criterion(CriterionKind::AbsenceDays, CriterionOp::Less, 1)];
        assert!(aggregate(&records, &less)[0].is_screening_target);

        let not_matching = vec![criterion(CriterionKind::AbsenceDays, CriterionOp::Greater, 2)];
        assert!(!aggregate(&records, &not_matching)[0].is_screening_target);
    }

    #[test]
    fn any_criterion_flags() {
        let records = vec![record("김민준", "1반", 500)];
        let criteria = vec![
            criterion(CriterionKind::AverageStayTime, CriterionOp::Less, 60),
            criterion(CriterionKind::AbsenceDays, CriterionOp::Greater, 5),
        ];
        // avg 500 fails the first criterion but 1 day < 5 matches the second
        assert!(aggregate(&records, &criteria)[0].is_screening_target);
    }
}
