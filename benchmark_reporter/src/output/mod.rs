//!
//! Benchmark reporter output.
//!


pub mod csv;
pub mod format;
pub mod json;
pub mod markdown;
pub mod xlsx;

use std::io::Write;
use std::path::PathBuf;

use crate::model::result_set::ResultSet;
use crate::output::csv::Csv;
use crate::output::format::Format;
use crate::output::json::Json;
use crate::output::markdown::Markdown;
use crate::output::xlsx::Xlsx;
use crate::report::settings::Settings;

///
/// Rendered benchmark results.
///
pub enum Output {
    /// Benchmark output is a single unnamed file.
    SingleFile(String),
    /// Benchmark output is a single unnamed spreadsheet.
    SingleFileXlsx(rust_xlsxwriter::Workbook),
}

impl Output {
    ///
    /// Writes the benchmark results to a file.
    ///
    pub fn write_to_file(self, path: PathBuf) -> anyhow::Result<()> {
        match self {
            Output::SingleFile(content) => {
                std::fs::write(path.as_path(), content)
                    .map_err(|error| anyhow::anyhow!("Benchmark file {path:?} writing: {error}"))?;
            }
            Output::SingleFileXlsx(mut workbook) => {
                workbook
                    .save(path.as_path())
                    .map_err(|error| anyhow::anyhow!("Benchmark file {path:?} writing: {error}"))?;
            }
        }
        Ok(())
    }

    ///
    /// Writes the benchmark results to the standard output.
    ///
    pub fn write_to_stdout(self) -> anyhow::Result<()> {
        match self {
            Output::SingleFile(content) => {
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(content.as_bytes())
                    .and_then(|()| stdout.flush())
                    .map_err(|error| anyhow::anyhow!("Benchmark output writing: {error}"))?;
            }
            Output::SingleFileXlsx(_) => {
                anyhow::bail!("The `xlsx` format cannot be written to the standard output")
            }
        }
        Ok(())
    }
}

impl TryFrom<(&ResultSet, &Settings, Format)> for Output {
    type Error = anyhow::Error;

    fn try_from(
        (result_set, settings, output_format): (&ResultSet, &Settings, Format),
    ) -> Result<Self, Self::Error> {
        Ok(match output_format {
            Format::Markdown => Markdown::from((result_set, settings)).into(),
            Format::Csv => Csv::from(result_set).into(),
            Format::Json => Json::from(result_set).into(),
            Format::Xlsx => Xlsx::try_from((result_set, settings))?.into(),
        })
    }
}

impl From<Markdown> for Output {
    fn from(value: Markdown) -> Self {
        Output::SingleFile(value.content)
    }
}

impl From<Csv> for Output {
    fn from(value: Csv) -> Self {
        Output::SingleFile(value.content)
    }
}

impl From<Json> for Output {
    fn from(value: Json) -> Self {
        Output::SingleFile(value.content)
    }
}

impl From<Xlsx> for Output {
    fn from(value: Xlsx) -> Self {
        Output::SingleFileXlsx(value.finalize())
    }
}
