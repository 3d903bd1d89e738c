//!
//! A report section comparing the implementations of one benchmark kind.
//!

use crate::kind::Kind;
use crate::model::record::Record;
use crate::model::result_set::ResultSet;
use crate::model::result_set::SizeTable;
use crate::report::settings::Settings;
use crate::report::speedup::Speedup;

///
/// A report section comparing the implementations of one benchmark kind.
///
#[derive(Debug)]
pub struct Section<'a> {
    /// The benchmark kind.
    pub kind: &'a Kind,
    /// The baseline records, or `None` if the baseline was not benchmarked for this kind.
    pub baseline: Option<Vec<&'a Record>>,
    /// The other implementations, in the rendering order.
    pub comparisons: Vec<Comparison<'a>>,
}

///
/// The records of a non-baseline implementation with their speedups.
///
#[derive(Debug)]
pub struct Comparison<'a> {
    /// The implementation name.
    pub implementation: &'a str,
    /// The records in the ascending size order.
    pub rows: Vec<(&'a Record, Speedup)>,
}

impl<'a> Section<'a> {
    ///
    /// Builds the sections of all kinds present in the result set, in the report order.
    ///
    pub fn build_all(result_set: &'a ResultSet, settings: &Settings) -> Vec<Self> {
        let mut kinds = result_set.kinds();
        Kind::sort(kinds.as_mut_slice());
        kinds
            .into_iter()
            .map(|kind| Self::build(result_set, kind, settings))
            .collect()
    }

    ///
    /// Builds the section of a single kind.
    ///
    pub fn build(result_set: &'a ResultSet, kind: &'a Kind, settings: &Settings) -> Self {
        let implementations = match result_set.implementations(kind) {
            Some(implementations) => implementations,
            None => return Self::without_baseline(kind),
        };

        let baseline_table = match implementations
            .get(settings.baseline.as_str())
            .filter(|sizes| !sizes.is_empty())
        {
            Some(sizes) => sizes,
            None => return Self::without_baseline(kind),
        };

        let mut ordered: Vec<&'a str> = Vec::with_capacity(implementations.len());
        for preferred in settings.preferred.iter() {
            if let Some((name, _)) = implementations.get_key_value(preferred.as_str()) {
                if !ordered.contains(&name.as_str()) {
                    ordered.push(name.as_str());
                }
            }
        }
        let mut remaining: Vec<&'a str> = implementations
            .keys()
            .map(String::as_str)
            .filter(|name| {
                !settings
                    .preferred
                    .iter()
                    .any(|preferred| preferred.as_str() == *name)
            })
            .collect();
        remaining.sort_unstable();
        ordered.extend(remaining);

        let comparisons = ordered
            .into_iter()
            .filter(|name| *name != settings.baseline.as_str())
            .filter_map(|name| {
                let sizes = implementations.get(name)?;
                if sizes.is_empty() {
                    return None;
                }
                Some(Comparison::new(name, sizes, baseline_table))
            })
            .collect();

        Self {
            kind,
            baseline: Some(Self::ascending(baseline_table.values().collect())),
            comparisons,
        }
    }

    ///
    /// A section of a kind the baseline was not benchmarked for.
    ///
    fn without_baseline(kind: &'a Kind) -> Self {
        Self {
            kind,
            baseline: None,
            comparisons: vec![],
        }
    }

    ///
    /// Sorts records by the input size.
    ///
    fn ascending(mut records: Vec<&'a Record>) -> Vec<&'a Record> {
        records.sort_by_key(|record| record.size);
        records
    }

    ///
    /// Returns the comparison table heading.
    ///
    /// Tables of inverse kinds are suffixed with the kind to tell them from forward ones.
    ///
    pub fn comparison_heading(&self, comparison: &Comparison<'_>) -> String {
        if self.kind.is_inverse() {
            format!("{} ({})", comparison.implementation, self.kind)
        } else {
            comparison.implementation.to_owned()
        }
    }
}

impl<'a> Comparison<'a> {
    ///
    /// Pairs every record of an implementation with its speedup against the baseline.
    ///
    pub fn new(implementation: &'a str, sizes: &'a SizeTable, baseline: &'a SizeTable) -> Self {
        let mut rows: Vec<(&'a Record, Speedup)> = sizes
            .iter()
            .map(|(size, record)| (record, Speedup::new(baseline.get(size), record)))
            .collect();
        rows.sort_by_key(|(record, _)| record.size);
        Self {
            implementation,
            rows,
        }
    }
}
