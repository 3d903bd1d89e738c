//!
//! The benchmark result set.
//!


use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::input::parser::Parser;
use crate::kind::Kind;
use crate::model::record::Record;

///
/// The library identifier.
///
pub type Implementation = String;

///
/// Records of one implementation, keyed by the input size.
///
pub type SizeTable = BTreeMap<u64, Record>;

///
/// Records of one kind, keyed by the implementation.
///
pub type ImplementationTable = BTreeMap<Implementation, SizeTable>;

///
/// The benchmark result set.
///
/// Storage order carries no meaning, the report applies its own ordering.
///
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    /// The records grouped by kind, implementation, and size.
    pub kinds: BTreeMap<Kind, ImplementationTable>,
}

impl ResultSet {
    ///
    /// Inserts a record, replacing the one with the same kind, implementation, and size.
    ///
    /// Returns the replaced record, if any.
    ///
    pub fn insert(&mut self, record: Record) -> Option<Record> {
        self.kinds
            .entry(record.kind.clone())
            .or_default()
            .entry(record.implementation.clone())
            .or_default()
            .insert(record.size, record)
    }

    ///
    /// Returns the total number of records.
    ///
    pub fn count(&self) -> usize {
        self.kinds
            .values()
            .flat_map(|implementations| implementations.values())
            .map(|sizes| sizes.len())
            .sum()
    }

    ///
    /// Whether no record has been inserted.
    ///
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    ///
    /// Returns the kinds present in the set.
    ///
    /// The order is unspecified, use [`Kind::sort`] to get the report order.
    ///
    pub fn kinds(&self) -> Vec<&Kind> {
        self.kinds.keys().collect()
    }

    ///
    /// Returns the records of a kind.
    ///
    pub fn implementations(&self, kind: &Kind) -> Option<&ImplementationTable> {
        self.kinds.get(kind)
    }

    ///
    /// Returns the record stored at the given key.
    ///
    pub fn get(&self, kind: &Kind, implementation: &str, size: u64) -> Option<&Record> {
        self.kinds
            .get(kind)?
            .get(implementation)?
            .get(&size)
    }

    ///
    /// Returns all records in the report order: kind priority, implementation name, size.
    ///
    pub fn records(&self) -> Vec<&Record> {
        let mut kinds = self.kinds();
        Kind::sort(kinds.as_mut_slice());
        kinds
            .into_iter()
            .filter_map(|kind| self.kinds.get(kind))
            .flat_map(|implementations| implementations.values())
            .flat_map(|sizes| sizes.values())
            .collect()
    }

    ///
    /// Merges another result set into this one, the other set's records winning on conflicts.
    ///
    pub fn extend(&mut self, other: ResultSet) {
        for implementations in other.kinds.into_values() {
            for sizes in implementations.into_values() {
                for record in sizes.into_values() {
                    self.insert(record);
                }
            }
        }
    }

    ///
    /// Parses every line of `reader` and inserts the recognized records.
    ///
    /// Lines are split on raw bytes, so invalid UTF-8 only spoils the line it occurs in.
    /// Returns the number of recognized lines.
    ///
    pub fn extend_from_reader<R>(&mut self, parser: &Parser, reader: R) -> std::io::Result<usize>
    where
        R: std::io::BufRead,
    {
        let mut recognized = 0;
        for line in reader.split(b'\n') {
            if self.extend_from_line(parser, &Self::decode_line(line?.as_slice())) {
                recognized += 1;
            }
        }
        Ok(recognized)
    }

    ///
    /// Decodes a raw line, replacing invalid UTF-8 and dropping the carriage return.
    ///
    pub fn decode_line(line: &[u8]) -> std::borrow::Cow<'_, str> {
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        String::from_utf8_lossy(line)
    }

    ///
    /// Parses a single line and inserts the record if the line is recognized.
    ///
    pub fn extend_from_line(&mut self, parser: &Parser, line: &str) -> bool {
        match parser.parse(line) {
            Some(record) => {
                self.insert(record);
                true
            }
            None => false,
        }
    }
}
