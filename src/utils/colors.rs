/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Occupancy color: over capacity → red, at capacity → yellow, free → reset.
pub fn color_for_occupancy(count: i64, capacity: i64) -> &'static str {
    if count > capacity {
        RED
    } else if count == capacity {
        YELLOW
    } else {
        RESET
    }
}

/// Screening targets are printed red; everyone else unstyled.
pub fn color_for_screening(is_target: bool) -> &'static str {
    if is_target { RED } else { RESET }
}

/// Greys out empty or placeholder cell values.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "-" || value.trim() == "0시간 0분" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
