//! Time parsing: converts heterogeneous operator-entered cell values
//! (clock times, durations, ranges, Korean time phrases, spreadsheet time
//! serials) into integer minutes.
//!
//! Every function here is total. Unrecognized input parses to 0 rather than
//! failing: rejecting a cell would silently drop the student from all
//! downstream statistics, while a zero-duration record stays visible.

use crate::models::RawCell;
use regex::Regex;
use std::sync::LazyLock;

pub const MINUTES_PER_DAY: i64 = 1440;

static DURATION_HOURS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)시간").unwrap());
static DURATION_MINS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)분").unwrap());
static DIGITAL_CLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,2}):(\d{2})(?::\d{2})?").unwrap());
static KOREAN_CLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,2})시(?:(\d{1,2})분)?").unwrap());
// "N시" not followed by 간, i.e. a clock reading rather than an N시간 duration.
static CLOCK_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d시(?:[^간]|$)").unwrap());
static BARE_INTEGER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+$").unwrap());

/// Parse any accepted raw cell into minutes. Returns 0 for empty, `"-"`, or
/// wholly unrecognized input.
pub fn parse_cell(raw: &RawCell) -> i64 {
    match raw {
        RawCell::Number(n) => parse_number(*n),
        RawCell::Text(s) => parse_text(s),
    }
}

/// Numbers in [1, 1000] are taken literally as minutes; anything below 1 or
/// above 1000 is read as a spreadsheet fractional day. The threshold is a
/// compatibility heuristic, not a format tag, and must not change.
fn parse_number(n: f64) -> i64 {
    if !n.is_finite() {
        return 0;
    }
    if n < 1.0 || n > 1000.0 {
        (n * MINUTES_PER_DAY as f64).round() as i64
    } else {
        n.round() as i64
    }
}

type Matcher = fn(&str) -> Option<i64>;

/// Tried in order; the first match wins. Each matcher is total and
/// side-effect-free, so a failed attempt falls through cleanly.
const MATCHERS: [Matcher; 5] = [
    match_range,
    match_duration_phrase,
    match_digital_clock,
    match_korean_clock,
    match_bare_minutes,
];

/// Parse free text into minutes, trying each matcher in priority order.
pub fn parse_text(s: &str) -> i64 {
    let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    if cleaned.is_empty() || cleaned == "-" {
        return 0;
    }
    for matcher in MATCHERS {
        if let Some(mins) = matcher(&cleaned) {
            return mins;
        }
    }
    0
}

/// "14:00~15:00" or "14:00-15:00" → duration between the two clock
/// readings. A leading '-' is a sign, not a separator. Both sides must
/// parse nonzero with end after start; otherwise the original string falls
/// through to the later matchers.
fn match_range(s: &str) -> Option<i64> {
    let sep = if s.contains('~') {
        '~'
    } else if s.char_indices().any(|(i, c)| c == '-' && i > 0) {
        '-'
    } else {
        return None;
    };

    let parts: Vec<&str> = s.split(sep).collect();
    if parts.len() != 2 {
        return None;
    }

    let start = parse_text(parts[0]);
    let end = parse_text(parts[1]);
    if start > 0 && end > start {
        Some(end - start)
    } else {
        None
    }
}

/// "1시간 30분", "2시간", "45분" → summed duration. A `분` component alone
/// does not fire when the string carries a clock marker, so "2시30분" is
/// left for the clock matcher.
fn match_duration_phrase(s: &str) -> Option<i64> {
    let hours = DURATION_HOURS
        .captures(s)
        .and_then(|c| c[1].parse::<f64>().ok());
    let minutes = DURATION_MINS
        .captures(s)
        .and_then(|c| c[1].parse::<f64>().ok());

    if hours.is_none() && minutes.is_none() {
        return None;
    }
    if hours.is_none() && CLOCK_MARKER.is_match(s) {
        return None;
    }

    let total = hours.unwrap_or(0.0) * 60.0 + minutes.unwrap_or(0.0);
    Some(total.round() as i64)
}

/// "13:00", "9:05", "14:30:15" (seconds ignored) → minute of day, with
/// 12-hour adjustment when the surrounding text carries a meridiem marker
/// ("오후 2:30", "PM2:30").
fn match_digital_clock(s: &str) -> Option<i64> {
    let caps = DIGITAL_CLOCK.captures(s)?;
    let hour: i64 = caps[1].parse().ok()?;
    let minute: i64 = caps[2].parse().ok()?;
    Some(apply_meridiem(hour, s) * 60 + minute)
}

/// "2시", "5시30분", "오후 3시" → minute of day with the same 12-hour
/// adjustment as the digital clock.
fn match_korean_clock(s: &str) -> Option<i64> {
    let caps = KOREAN_CLOCK.captures(s)?;
    let hour: i64 = caps[1].parse().ok()?;
    let minute: i64 = caps
        .get(2)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0);
    Some(apply_meridiem(hour, s) * 60 + minute)
}

/// A bare unsigned integer is already a minute count.
fn match_bare_minutes(s: &str) -> Option<i64> {
    if BARE_INTEGER.is_match(s) {
        s.parse().ok()
    } else {
        None
    }
}

fn apply_meridiem(hour: i64, s: &str) -> i64 {
    let lowered = s.to_lowercase();
    if (s.contains("오후") || lowered.contains("pm")) && hour < 12 {
        hour + 12
    } else if (s.contains("오전") || lowered.contains("am")) && hour == 12 {
        0
    } else {
        hour
    }
}
