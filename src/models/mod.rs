pub mod criterion;
pub mod raw;
pub mod record;
pub mod slot;
pub mod stats;

pub use criterion::{CriterionKind, CriterionOp, ScreeningCriterion};
pub use raw::RawCell;
pub use record::StudentRecord;
pub use slot::OccupancySlot;
pub use stats::StudentStat;
