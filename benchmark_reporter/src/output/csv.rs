//!
//! Serializing benchmark data to CSV.
//!

use std::fmt::Write;

use crate::model::record::Record;
use crate::model::result_set::ResultSet;

///
/// Serialize the result set to CSV in the following format:
/// type,library,size,ns_per_op,mb_per_s,bytes_per_op,allocs_per_op
///
#[derive(Default)]
pub struct Csv {
    /// The CSV string.
    pub content: String,
}

impl Csv {
    /// The header row.
    pub const HEADER: &'static str =
        "type,library,size,ns_per_op,mb_per_s,bytes_per_op,allocs_per_op";

    ///
    /// Estimate the size of the CSV file based on the number of records.
    ///
    fn estimate_csv_size(result_set: &ResultSet) -> usize {
        let line_estimated_length = 64;
        (result_set.count() + 1) * line_estimated_length
    }

    ///
    /// Quotes a field if it contains a separator or a quote.
    ///
    fn escape(field: &str) -> String {
        if field.contains([',', '"']) {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_owned()
        }
    }
}

impl From<&ResultSet> for Csv {
    fn from(result_set: &ResultSet) -> Csv {
        let mut content = String::with_capacity(Self::estimate_csv_size(result_set));
        content.push_str(Self::HEADER);
        content.push('\n');

        for Record {
            kind,
            implementation,
            size,
            time_per_op,
            throughput,
            bytes_per_op,
            allocs_per_op,
        } in result_set.records()
        {
            writeln!(
                &mut content,
                "{kind},{},{size},{time_per_op},{throughput},{bytes_per_op},{allocs_per_op}",
                Self::escape(implementation.as_str()),
            )
            .expect("Always valid");
        }

        Self { content }
    }
}
