//! Canonical time display: any accepted raw representation becomes a
//! zero-padded "HH:MM" string; unparseable input passes through unchanged so
//! the operator's original text stays visible in tables and exports.

use crate::core::time_parse::parse_cell;
use crate::models::RawCell;
use crate::utils::time::minutes_to_hhmm;

/// Normalize a raw cell to "HH:MM". When parsing yields 0 from anything
/// other than a recognizable zero, the original value is returned unchanged
/// rather than coerced to "00:00". Hours wrap modulo 24.
pub fn normalize(raw: &RawCell) -> String {
    let mins = parse_cell(raw);
    if mins < 0 || (mins == 0 && !is_recognized_zero(raw)) {
        return raw.as_display();
    }
    minutes_to_hhmm(mins)
}

fn is_recognized_zero(raw: &RawCell) -> bool {
    match raw {
        RawCell::Number(n) => *n == 0.0,
        RawCell::Text(s) => {
            let t = s.trim();
            t == "0" || t == "00:00"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(s: &str) -> String {
        normalize(&RawCell::from(s))
    }

    #[test]
    fn canonical_input_is_unchanged() {
        assert_eq!(norm("13:00"), "13:00");
        assert_eq!(norm("09:05"), "09:05");
        assert_eq!(norm("00:00"), "00:00");
    }

    #[test]
    fn recognized_formats_become_hhmm() {
        assert_eq!(norm("오후 2시30분"), "14:30");
        assert_eq!(norm("9:05"), "09:05");
        assert_eq!(norm("0"), "00:00");
        assert_eq!(normalize(&RawCell::Number(0.5)), "12:00");
        assert_eq!(normalize(&RawCell::Number(0.0)), "00:00");
    }

    #[test]
    fn unparseable_input_passes_through() {
        assert_eq!(norm("미정"), "미정");
        assert_eq!(norm("??"), "??");
        assert_eq!(norm(""), "");
    }

    #[test]
    fn hours_wrap_modulo_24() {
        // 1330 bare minutes = 22:10
        assert_eq!(norm("1330"), "22:10");
        // 25:00 reads as 1500 minutes, one hour past a full day
        assert_eq!(norm("25:00"), "01:00");
    }

    #[test]
    fn negative_serials_pass_through() {
        assert_eq!(normalize(&RawCell::Number(-0.25)), "-0.25");
    }
}
