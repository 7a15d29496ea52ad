use chrono::{NaiveTime, Timelike};

/// Interpret a cell as a clock time, returning the Excel day-fraction
/// serial and its number format. "HH:MM" cells then sort and compute as
/// times inside the workbook instead of as text.
pub(crate) fn parse_to_excel_time(s: &str) -> Option<(&'static str, f64)> {
    let formats = ["%H:%M:%S", "%H:%M"];

    for fmt in formats.iter() {
        if let Ok(t) = NaiveTime::parse_from_str(s, fmt) {
            let seconds = t.num_seconds_from_midnight() as f64;
            return Some(("hh:mm", seconds / 86400.0));
        }
    }

    None
}
