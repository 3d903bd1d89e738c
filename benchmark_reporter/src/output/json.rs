//!
//! JSON output format.
//!

use crate::model::result_set::ResultSet;

///
/// The result set serialized as pretty JSON.
///
#[derive(Default)]
pub struct Json {
    /// Serialized JSON.
    pub content: String,
}

impl From<&ResultSet> for Json {
    fn from(result_set: &ResultSet) -> Self {
        let content = serde_json::to_string_pretty(result_set).expect("Always valid");
        Self { content }
    }
}
