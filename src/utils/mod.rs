pub mod colors;
pub mod table;
pub mod time;

pub use time::mins_to_korean;
pub use time::minutes_to_hhmm;
