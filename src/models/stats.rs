use serde::Serialize;

/// Per-(student, class) aggregate over all imported rows.
#[derive(Debug, Clone, Serialize)]
pub struct StudentStat {
    pub name: String,
    pub class_name: String,
    pub total_minutes: i64,
    pub days_count: i64,
    /// round(total_minutes / days_count)
    pub avg_stay: i64,
    pub is_screening_target: bool,
}
