//! Occupancy projection: peak concurrent headcount per hour of the working
//! window, for one weekday and an optional class filter.

use crate::core::time_parse::parse_text;
use crate::models::{OccupancySlot, StudentRecord};
use crate::utils::time::minutes_to_hhmm;

/// Capacity applied when projecting across all classes; capacity is defined
/// per class, so the combined projection is effectively unbounded.
pub const UNBOUNDED_CAPACITY: i64 = 999;

const SLOT_MINUTES: i64 = 60;
const PROBE_STEP: i64 = 10;

/// Project hourly occupancy slots over `[work_start, work_end)` minutes.
///
/// Concurrency is sampled at six 10-minute probe points per hour and the
/// slot takes the maximum. A true peak can fall between probes; the bounded
/// error is accepted in exchange for O(slots × 6 × records) cost.
///
/// `class` of `None` projects all classes together and never flags
/// overflow. A record contributes to a probe when its weekday field
/// contains the selected token and the probe time falls within
/// `[start, end)`.
pub fn project(
    records: &[StudentRecord],
    class: Option<&str>,
    weekday: &str,
    work_start: i64,
    work_end: i64,
    capacity: i64,
) -> Vec<OccupancySlot> {
    let intervals: Vec<(i64, i64)> = records
        .iter()
        .filter(|r| class.is_none_or(|c| r.class_name == c))
        .filter(|r| r.day_of_week.contains(weekday))
        .map(|r| (parse_text(&r.start_time), parse_text(&r.end_time)))
        .collect();

    let cap = if class.is_some() {
        capacity
    } else {
        UNBOUNDED_CAPACITY
    };

    let mut slots = Vec::new();
    let mut slot_start = work_start;
    while slot_start < work_end {
        let mut peak: i64 = 0;
        for step in 0..(SLOT_MINUTES / PROBE_STEP) {
            let probe = slot_start + step * PROBE_STEP;
            let count = intervals
                .iter()
                .filter(|(start, end)| *start <= probe && probe < *end)
                .count() as i64;
            peak = peak.max(count);
        }

        slots.push(OccupancySlot {
            time: minutes_to_hhmm(slot_start),
            count: peak,
            is_over: class.is_some() && peak > cap,
        });
        slot_start += SLOT_MINUTES;
    }

    slots
}
