//!
//! Speedup of an implementation against the baseline.
//!

use crate::model::record::Record;

///
/// Speedup of an implementation against the baseline at the same input size.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Speedup {
    /// Baseline time divided by the implementation time.
    Ratio(f64),
    /// The baseline has no record at this size, or the implementation time is not positive.
    NotApplicable,
}

impl Speedup {
    /// The cell text when no ratio can be computed.
    pub const NOT_APPLICABLE: &'static str = "N/A";

    ///
    /// Computes the speedup of `candidate` against `baseline`.
    ///
    pub fn new(baseline: Option<&Record>, candidate: &Record) -> Self {
        let baseline = match baseline {
            Some(baseline) => baseline,
            None => return Self::NotApplicable,
        };
        if candidate.time_per_op <= 0.0 {
            return Self::NotApplicable;
        }

        let ratio = baseline.time_per_op / candidate.time_per_op;
        if ratio.is_finite() {
            Self::Ratio(ratio)
        } else {
            Self::NotApplicable
        }
    }

    ///
    /// Whether the implementation is at least as fast as the baseline.
    ///
    pub fn is_improvement(&self) -> bool {
        matches!(self, Self::Ratio(ratio) if *ratio >= 1.0)
    }

    ///
    /// Returns the ratio, if any.
    ///
    pub fn ratio(&self) -> Option<f64> {
        match self {
            Self::Ratio(ratio) => Some(*ratio),
            Self::NotApplicable => None,
        }
    }
}

impl std::fmt::Display for Speedup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ratio(ratio) if self.is_improvement() => write!(f, "**{ratio:.2}x**"),
            Self::Ratio(ratio) => write!(f, "{ratio:.2}x"),
            Self::NotApplicable => f.write_str(Self::NOT_APPLICABLE),
        }
    }
}
