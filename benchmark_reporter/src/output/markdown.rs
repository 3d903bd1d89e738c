//!
//! Markdown output format.
//!

use crate::model::result_set::ResultSet;
use crate::report::settings::Settings;

///
/// The comparative markdown report.
///
#[derive(Default)]
pub struct Markdown {
    /// The report text.
    pub content: String,
}

impl From<(&ResultSet, &Settings)> for Markdown {
    fn from((result_set, settings): (&ResultSet, &Settings)) -> Self {
        Self {
            content: crate::report::generate(result_set, settings),
        }
    }
}
