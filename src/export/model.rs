//! Flat row models for export: one struct per report kind, serialized
//! as-is to CSV/JSON and stringified for XLSX.

use crate::models::{OccupancySlot, StudentRecord, StudentStat};
use serde::Serialize;

#[derive(Serialize, Clone, Debug)]
pub struct RecordRow {
    pub id: u32,
    pub student: String,
    pub class: String,
    pub day: String,
    pub start: String,
    pub end: String,
    pub outing: String,
    pub care_minutes: i64,
}

impl From<&StudentRecord> for RecordRow {
    fn from(rec: &StudentRecord) -> Self {
        Self {
            id: rec.id,
            student: rec.student_name.clone(),
            class: rec.class_name.clone(),
            day: rec.day_of_week.clone(),
            start: rec.start_time.clone(),
            end: rec.end_time.clone(),
            outing: rec.outing_time.clone(),
            care_minutes: rec.actual_care_minutes,
        }
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct StatRow {
    pub student: String,
    pub class: String,
    pub days: i64,
    pub total_minutes: i64,
    pub avg_stay: i64,
    pub screening: bool,
}

impl From<&StudentStat> for StatRow {
    fn from(stat: &StudentStat) -> Self {
        Self {
            student: stat.name.clone(),
            class: stat.class_name.clone(),
            days: stat.days_count,
            total_minutes: stat.total_minutes,
            avg_stay: stat.avg_stay,
            screening: stat.is_screening_target,
        }
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct SlotRow {
    pub time: String,
    pub count: i64,
    pub over: bool,
}

impl From<&OccupancySlot> for SlotRow {
    fn from(slot: &OccupancySlot) -> Self {
        Self {
            time: slot.time.clone(),
            count: slot.count,
            over: slot.is_over,
        }
    }
}

/// A fully-prepared report, ready for any output format.
pub enum Report {
    Records(Vec<RecordRow>),
    Stats(Vec<StatRow>),
    Occupancy(Vec<SlotRow>),
}

impl Report {
    pub fn headers(&self) -> Vec<&'static str> {
        match self {
            Report::Records(_) => vec![
                "id",
                "student",
                "class",
                "day",
                "start",
                "end",
                "outing",
                "care_minutes",
            ],
            Report::Stats(_) => vec![
                "student",
                "class",
                "days",
                "total_minutes",
                "avg_stay",
                "screening",
            ],
            Report::Occupancy(_) => vec!["time", "count", "over"],
        }
    }

    /// Stringified rows for the XLSX writer.
    pub fn string_rows(&self) -> Vec<Vec<String>> {
        match self {
            Report::Records(rows) => rows
                .iter()
                .map(|r| {
                    vec![
                        r.id.to_string(),
                        r.student.clone(),
                        r.class.clone(),
                        r.day.clone(),
                        r.start.clone(),
                        r.end.clone(),
                        r.outing.clone(),
                        r.care_minutes.to_string(),
                    ]
                })
                .collect(),
            Report::Stats(rows) => rows
                .iter()
                .map(|r| {
                    vec![
                        r.student.clone(),
                        r.class.clone(),
                        r.days.to_string(),
                        r.total_minutes.to_string(),
                        r.avg_stay.to_string(),
                        r.screening.to_string(),
                    ]
                })
                .collect(),
            Report::Occupancy(rows) => rows
                .iter()
                .map(|r| vec![r.time.clone(), r.count.to_string(), r.over.to_string()])
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Report::Records(rows) => rows.is_empty(),
            Report::Stats(rows) => rows.is_empty(),
            Report::Occupancy(rows) => rows.is_empty(),
        }
    }
}
