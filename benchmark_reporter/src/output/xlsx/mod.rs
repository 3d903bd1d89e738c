//!
//! XLSX output format for benchmark data.
//!

pub mod worksheet;

use crate::model::result_set::ResultSet;
use crate::report::section::Section;
use crate::report::settings::Settings;

use self::worksheet::Worksheet;

///
/// XLSX output format for benchmark data, one worksheet per kind.
///
#[derive(Default)]
pub struct Xlsx {
    /// Worksheets in the report order.
    pub worksheets: Vec<Worksheet>,
}

impl Xlsx {
    /// The name of the only worksheet of an empty workbook.
    const EMPTY_WORKSHEET_NAME: &'static str = "Benchmarks";

    ///
    /// Returns the final workbook with all worksheets.
    ///
    pub fn finalize(self) -> rust_xlsxwriter::Workbook {
        let mut workbook = rust_xlsxwriter::Workbook::new();
        for worksheet in self.worksheets.into_iter() {
            workbook.push_worksheet(worksheet.into_inner());
        }
        workbook
    }
}

impl TryFrom<(&ResultSet, &Settings)> for Xlsx {
    type Error = anyhow::Error;

    fn try_from((result_set, settings): (&ResultSet, &Settings)) -> Result<Self, Self::Error> {
        let mut xlsx = Self::default();

        for section in Section::build_all(result_set, settings).into_iter() {
            let mut worksheet = Worksheet::new(section.kind.as_str())?;

            match section.baseline.as_deref() {
                Some(baseline) => {
                    for record in baseline.iter() {
                        worksheet.write_record(settings.baseline_label(), record, None)?;
                    }
                    for comparison in section.comparisons.iter() {
                        let label = section.comparison_heading(comparison);
                        for (record, speedup) in comparison.rows.iter() {
                            worksheet.write_record(label.as_str(), record, Some(speedup))?;
                        }
                    }
                }
                None => worksheet.write_notice(
                    format!("Error: Baseline library '{}' not found", settings.baseline).as_str(),
                )?,
            }

            xlsx.worksheets.push(worksheet);
        }

        if xlsx.worksheets.is_empty() {
            xlsx.worksheets
                .push(Worksheet::new(Self::EMPTY_WORKSHEET_NAME)?);
        }

        Ok(xlsx)
    }
}
