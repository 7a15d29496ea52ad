//! Actual care time: supervised minutes between entry and exit, minus any
//! outing, clamped at zero.

use crate::core::time_parse::{MINUTES_PER_DAY, parse_cell};
use crate::models::RawCell;

/// Compute a student's supervised-care duration in minutes.
///
/// An exit earlier than the entry is read as crossing midnight. The outing
/// value may be a duration phrase ("30분") or a range ("14:00~15:00"); both
/// parse to a minute count. An outing exceeding the attendance window
/// yields 0, never a negative duration.
pub fn actual_care_minutes(start: &RawCell, end: &RawCell, outing: &RawCell) -> i64 {
    let start = parse_cell(start);
    let end = parse_cell(end);

    let gross = if end >= start {
        end - start
    } else {
        (MINUTES_PER_DAY - start) + end
    };

    (gross - parse_cell(outing)).max(0)
}
