//!
//! The `go test -bench` result line parser.
//!


use regex::Regex;

use crate::kind::Kind;
use crate::model::record::Record;

///
/// The `go test -bench` result line parser.
///
/// Recognizes lines such as
/// `BenchmarkFFT/gonum/1024-8  50000  23071 ns/op  710.21 MB/s  0 B/op  0 allocs/op`.
///
#[derive(Debug, Clone)]
pub struct Parser {
    /// The compiled line grammar.
    regex: Regex,
    /// The kind tokens accepted in the benchmark name.
    kinds: Vec<Kind>,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new(Kind::CANONICAL.to_vec())
    }
}

impl Parser {
    /// The line grammar.
    const PATTERN: &'static str = concat!(
        r"^Benchmark(?P<kind>[^/\s]+)/(?P<implementation>[^/]+)/(?P<size>\d+)-\d+[ \t]+",
        r"\d+[ \t]+",
        r"(?P<time_per_op>\S+)[ \t]+ns/op[ \t]+",
        r"(?P<throughput>\S+)[ \t]+MB/s[ \t]+",
        r"(?P<bytes_per_op>\S+)[ \t]+B/op[ \t]+",
        r"(?P<allocs_per_op>\S+)[ \t]+allocs/op",
    );

    ///
    /// Creates a parser accepting the given kind tokens.
    ///
    pub fn new(kinds: Vec<Kind>) -> Self {
        Self {
            regex: Regex::new(Self::PATTERN).expect("Always valid"),
            kinds,
        }
    }

    ///
    /// Creates a parser accepting the canonical kinds and the `extra` ones.
    ///
    pub fn with_extra_kinds(extra: Vec<Kind>) -> Self {
        let mut kinds = Kind::CANONICAL.to_vec();
        for kind in extra.into_iter() {
            if !kinds.contains(&kind) {
                kinds.push(kind);
            }
        }
        Self::new(kinds)
    }

    ///
    /// Returns the accepted kind tokens.
    ///
    pub fn kinds(&self) -> &[Kind] {
        self.kinds.as_slice()
    }

    ///
    /// Parses a single line.
    ///
    /// Returns `None` if the line is not a benchmark result, or its kind is not accepted.
    /// Numeric fields which fail to parse are set to zero.
    ///
    pub fn parse(&self, line: &str) -> Option<Record> {
        let captures = self.regex.captures(line)?;

        let kind = Kind::from(&captures["kind"]);
        if !self.kinds.contains(&kind) {
            return None;
        }

        Some(Record::new(
            kind,
            captures["implementation"].to_owned(),
            captures["size"].parse().unwrap_or_default(),
            Self::parse_measurement(&captures["time_per_op"]),
            Self::parse_measurement(&captures["throughput"]),
            captures["bytes_per_op"].parse().unwrap_or_default(),
            captures["allocs_per_op"].parse().unwrap_or_default(),
        ))
    }

    ///
    /// Parses a non-negative finite measurement, falling back to zero.
    ///
    fn parse_measurement(field: &str) -> f64 {
        field
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite() && *value >= 0.0)
            .unwrap_or_default()
    }
}
