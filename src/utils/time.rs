//! Time formatting helpers shared by tables and exports.

/// Zero-padded "HH:MM"; hours wrap modulo 24.
pub fn minutes_to_hhmm(mins: i64) -> String {
    format!("{:02}:{:02}", (mins / 60) % 24, mins % 60)
}

/// Korean duration reading, e.g. 90 → "1시간 30분".
pub fn mins_to_korean(mins: i64) -> String {
    format!("{}시간 {}분", mins / 60, mins % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hhmm_formatting() {
        assert_eq!(minutes_to_hhmm(780), "13:00");
        assert_eq!(minutes_to_hhmm(545), "09:05");
        assert_eq!(minutes_to_hhmm(0), "00:00");
        assert_eq!(minutes_to_hhmm(1500), "01:00");
    }

    #[test]
    fn korean_duration_formatting() {
        assert_eq!(mins_to_korean(90), "1시간 30분");
        assert_eq!(mins_to_korean(0), "0시간 0분");
        assert_eq!(mins_to_korean(240), "4시간 0분");
    }
}
