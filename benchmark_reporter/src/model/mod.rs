//!
//! The benchmark results data model.
//!

pub mod record;
pub mod result_set;
