//!
//! A single benchmark measurement.
//!

use serde::Deserialize;
use serde::Serialize;

use crate::kind::Kind;

///
/// A single benchmark measurement.
///
/// The triple of `kind`, `implementation`, and `size` identifies the record in a result set.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// The benchmark kind.
    pub kind: Kind,
    /// The library under test.
    pub implementation: String,
    /// The input length.
    pub size: u64,
    /// Nanoseconds per operation.
    pub time_per_op: f64,
    /// Megabytes per second.
    pub throughput: f64,
    /// Bytes allocated per operation.
    pub bytes_per_op: u64,
    /// Allocations per operation.
    pub allocs_per_op: u64,
}

impl Record {
    ///
    /// A shortcut constructor.
    ///
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        kind: Kind,
        implementation: String,
        size: u64,
        time_per_op: f64,
        throughput: f64,
        bytes_per_op: u64,
        allocs_per_op: u64,
    ) -> Self {
        Self {
            kind,
            implementation,
            size,
            time_per_op,
            throughput,
            bytes_per_op,
            allocs_per_op,
        }
    }
}
