//!
//! The comparative benchmark report.
//!

#[cfg(test)]
mod tests;

pub mod number;
pub mod section;
pub mod settings;
pub mod speedup;

use std::fmt::Write;

use crate::model::record::Record;
use crate::model::result_set::ResultSet;

use self::section::Comparison;
use self::section::Section;
use self::settings::Settings;

///
/// Generates the markdown report comparing every implementation against the baseline.
///
/// The output depends only on the arguments, so repeated calls produce identical documents.
///
pub fn generate(result_set: &ResultSet, settings: &Settings) -> String {
    let mut content = String::with_capacity(estimate_size(result_set));

    write_header(&mut content, settings);
    for section in Section::build_all(result_set, settings).iter() {
        write_section(&mut content, section, settings);
    }

    content
}

///
/// Writes the title and the notes block.
///
fn write_header(content: &mut String, settings: &Settings) {
    let baseline = settings.baseline.as_str();

    content.push_str("# Benchmarks\n\n");
    if let Some(command) = settings.command.as_deref() {
        writeln!(content, "Command used: `{command}`\n").expect("Always valid");
    }
    content.push_str("Notes:\n\n");
    content.push_str("- Results are from the latest local run.\n");
    writeln!(
        content,
        "- `{baseline}` is used as the **baseline** for comparison."
    )
    .expect("Always valid");
    for note in settings.notes.iter() {
        writeln!(content, "- {note}").expect("Always valid");
    }
    writeln!(
        content,
        "- **Speedup** shows performance relative to the {baseline} baseline (higher is better).\n"
    )
    .expect("Always valid");
}

///
/// Writes the section of one benchmark kind.
///
fn write_section(content: &mut String, section: &Section<'_>, settings: &Settings) {
    writeln!(content, "## {} Benchmarks\n", section.kind).expect("Always valid");

    let baseline = match section.baseline.as_deref() {
        Some(baseline) => baseline,
        None => {
            writeln!(
                content,
                "### Error: Baseline library '{}' not found\n",
                settings.baseline
            )
            .expect("Always valid");
            return;
        }
    };

    write_baseline_table(content, baseline, settings);
    for comparison in section.comparisons.iter() {
        write_comparison_table(content, section.comparison_heading(comparison), comparison);
    }
}

///
/// Writes the baseline's own measurements.
///
fn write_baseline_table(content: &mut String, baseline: &[&Record], settings: &Settings) {
    writeln!(content, "### Baseline: {}\n", settings.baseline_label()).expect("Always valid");
    content.push_str("| Size  | ns/op  | MB/s     | B/op | allocs/op |\n");
    content.push_str("| ----- | ------ | -------- | ---- | --------- |\n");

    for record in baseline.iter() {
        writeln!(
            content,
            "| {:<5} | {:<6} | {:<8} | {:<4} | {:<9} |",
            record.size,
            number::format(record.time_per_op),
            number::format(record.throughput),
            record.bytes_per_op,
            record.allocs_per_op,
        )
        .expect("Always valid");
    }
    content.push('\n');
}

///
/// Writes the measurements of a non-baseline implementation with speedups.
///
fn write_comparison_table(content: &mut String, heading: String, comparison: &Comparison<'_>) {
    writeln!(content, "### {heading}\n").expect("Always valid");
    content.push_str(
        "| Size  | ns/op  | Speedup vs baseline | MB/s     | B/op   | allocs/op |\n",
    );
    content.push_str(
        "| ----- | ------ | ------------------- | -------- | ------ | --------- |\n",
    );

    for (record, speedup) in comparison.rows.iter() {
        writeln!(
            content,
            "| {:<5} | {:<6} | {:<19} | {:<8} | {:<6} | {:<9} |",
            record.size,
            number::format(record.time_per_op),
            speedup.to_string(),
            number::format(record.throughput),
            record.bytes_per_op,
            record.allocs_per_op,
        )
        .expect("Always valid");
    }
    content.push('\n');
}

///
/// Estimates the report size to avoid reallocations.
///
fn estimate_size(result_set: &ResultSet) -> usize {
    let header_estimated_length = 512;
    let row_estimated_length = 80;
    header_estimated_length + result_set.count() * row_estimated_length
}
