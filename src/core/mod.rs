//! The derivation core: total, pure functions from raw cell values to
//! canonical minutes and from record collections to derived statistics.
//! Nothing in here performs I/O or returns an error.

pub mod aggregate;
pub mod duration;
pub mod normalize;
pub mod occupancy;
pub mod time_parse;

pub use aggregate::aggregate;
pub use duration::actual_care_minutes;
pub use normalize::normalize;
pub use occupancy::project;
pub use time_parse::{parse_cell, parse_text};
