use serde::Serialize;

/// One hour-wide bucket of the working window.
#[derive(Debug, Clone, Serialize)]
pub struct OccupancySlot {
    /// Hour start, "HH:MM".
    pub time: String,
    /// Peak concurrent students observed within the hour.
    pub count: i64,
    /// Only meaningful when a single class was projected.
    pub is_over: bool,
}
