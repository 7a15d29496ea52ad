//! CSV import: header synonym resolution and row → StudentRecord mapping.
//!
//! Cell-level failures never abort the import; a malformed time simply
//! yields a zero-duration record with the original text preserved. Only a
//! file that produces no rows at all is an error.

use crate::core::{actual_care_minutes, normalize};
use crate::errors::{AppError, AppResult};
use crate::models::{RawCell, StudentRecord};
use csv::StringRecord;
use std::path::Path;

/// Recognized header spellings per column, tried in order. Matching is
/// exact first, then case- and whitespace-insensitive.
const NAME_HEADERS: &[&str] = &["학생명", "학생 이름", "이름", "name"];
const CLASS_HEADERS: &[&str] = &["반", "학급", "반명", "class"];
const DAY_HEADERS: &[&str] = &["요일", "돌봄요일", "이용요일", "day"];
const START_HEADERS: &[&str] = &["등원시간", "시작시간", "등원", "start"];
const END_HEADERS: &[&str] = &["하원시간", "종료시간", "하원", "end"];
const OUTING_HEADERS: &[&str] = &["외출시간", "외출", "outing"];

#[derive(Debug)]
pub struct ColumnMap {
    name: usize,
    class: usize,
    day: usize,
    start: usize,
    end: usize,
    /// Absent in many sheets; records then carry an empty outing.
    outing: Option<usize>,
}

/// Read and map every data row of a CSV attendance sheet.
pub fn read_records(path: &Path) -> AppResult<Vec<StudentRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    let cols = resolve_columns(&headers)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let id = records.len() as u32 + 1;
        if let Some(rec) = build_record(id, &row, &cols) {
            records.push(rec);
        }
    }

    if records.is_empty() {
        return Err(AppError::EmptyImport);
    }
    Ok(records)
}

pub fn resolve_columns(headers: &StringRecord) -> AppResult<ColumnMap> {
    Ok(ColumnMap {
        name: require(headers, NAME_HEADERS)?,
        class: require(headers, CLASS_HEADERS)?,
        day: require(headers, DAY_HEADERS)?,
        start: require(headers, START_HEADERS)?,
        end: require(headers, END_HEADERS)?,
        outing: find_column(headers, OUTING_HEADERS),
    })
}

/// Build one record; rows without a student name (spreadsheet padding) are
/// skipped.
fn build_record(id: u32, row: &StringRecord, cols: &ColumnMap) -> Option<StudentRecord> {
    let student_name = field(row, cols.name);
    if student_name.is_empty() {
        return None;
    }

    let start = cell(row, cols.start);
    let end = cell(row, cols.end);
    let outing = cols
        .outing
        .map(|i| cell(row, i))
        .unwrap_or_else(|| RawCell::Text(String::new()));

    Some(StudentRecord {
        id,
        student_name,
        class_name: field(row, cols.class),
        day_of_week: field(row, cols.day),
        start_time: normalize(&start),
        end_time: normalize(&end),
        // outings stay as entered: normalizing "30분" to a clock reading
        // would misrepresent a duration
        outing_time: outing.as_display(),
        actual_care_minutes: actual_care_minutes(&start, &end, &outing),
    })
}

fn require(headers: &StringRecord, names: &[&str]) -> AppResult<usize> {
    find_column(headers, names).ok_or_else(|| AppError::MissingColumn(names[0].to_string()))
}

fn find_column(headers: &StringRecord, names: &[&str]) -> Option<usize> {
    for (i, header) in headers.iter().enumerate() {
        if names.contains(&header.trim()) {
            return Some(i);
        }
    }
    let wanted: Vec<String> = names.iter().map(|n| fold_header(n)).collect();
    headers
        .iter()
        .position(|h| wanted.contains(&fold_header(h)))
}

fn fold_header(header: &str) -> String {
    header
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

fn field(row: &StringRecord, idx: usize) -> String {
    row.get(idx).unwrap_or("").trim().to_string()
}

fn cell(row: &StringRecord, idx: usize) -> RawCell {
    RawCell::from_field(row.get(idx).unwrap_or(""))
}
