use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CriterionKind {
    AverageStayTime,
    AbsenceDays,
}

impl CriterionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CriterionKind::AverageStayTime => "average-stay-time",
            CriterionKind::AbsenceDays => "absence-days",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CriterionOp {
    Greater,
    Less,
}

impl CriterionOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            CriterionOp::Greater => "greater",
            CriterionOp::Less => "less",
        }
    }
}

/// One user-configured screening rule. A student is a screening target when
/// any configured criterion matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningCriterion {
    pub id: u32,
    pub kind: CriterionKind,
    pub op: CriterionOp,
    pub value: i64,
}

impl ScreeningCriterion {
    /// True when this criterion flags the given aggregate.
    ///
    /// Absence-days compares against attended days, the only day count the
    /// input carries: `greater` flags fewer attended days than the
    /// threshold, `less` flags more.
    pub fn matches(&self, avg_stay: i64, days_count: i64) -> bool {
        match (self.kind, self.op) {
            (CriterionKind::AverageStayTime, CriterionOp::Less) => avg_stay < self.value,
            (CriterionKind::AverageStayTime, CriterionOp::Greater) => avg_stay > self.value,
            (CriterionKind::AbsenceDays, CriterionOp::Greater) => days_count < self.value,
            (CriterionKind::AbsenceDays, CriterionOp::Less) => days_count > self.value,
        }
    }
}
