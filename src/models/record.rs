use crate::utils::time::mins_to_korean;
use serde::Serialize;

/// One attendance row: one student on one scheduled day pattern.
/// Constructed once at import and immutable afterwards; the whole collection
/// is rebuilt from the input file on every run.
#[derive(Debug, Clone, Serialize)]
pub struct StudentRecord {
    pub id: u32,
    pub student_name: String,
    pub class_name: String,
    /// Free text, may carry several comma-separated weekday tokens ("월,수,금").
    pub day_of_week: String,
    /// Canonical "HH:MM", or the original text when unparseable.
    pub start_time: String,
    pub end_time: String,
    /// Outing interval ("14:00~15:00") or duration phrase ("30분"); may be empty.
    pub outing_time: String,
    /// Supervised minutes minus outing minutes, never negative.
    pub actual_care_minutes: i64,
}

impl StudentRecord {
    pub fn care_str(&self) -> String {
        mins_to_korean(self.actual_care_minutes)
    }
}
