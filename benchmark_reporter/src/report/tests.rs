//!
//! The comparative benchmark report tests.
//!

use super::generate;
use super::settings::Settings;
use crate::input::parser::Parser;
use crate::kind::Kind;
use crate::model::record::Record;
use crate::model::result_set::ResultSet;

fn record(kind: Kind, implementation: &str, size: u64, time_per_op: f64) -> Record {
    Record::new(
        kind,
        implementation.to_owned(),
        size,
        time_per_op,
        100.0,
        0,
        0,
    )
}

///
/// Returns the text of the section of `kind`, up to the next section.
///
fn section<'a>(report: &'a str, kind: &str) -> &'a str {
    let heading = format!("## {kind} Benchmarks\n\n");
    let start = report.find(heading.as_str()).expect("Section is missing");
    let rest = &report[start + heading.len()..];
    let end = rest.find("\n## ").map(|end| end + 1).unwrap_or(rest.len());
    &rest[..end]
}

#[test]
fn two_implementations() {
    let text = "BenchmarkFFT/libA/64-8  1000  120.50 ns/op  850.30 MB/s  128 B/op  2 allocs/op
BenchmarkFFT/libB/64-8  1000  60.25 ns/op  1700.60 MB/s  64 B/op  1 allocs/op
";
    let mut result_set = ResultSet::default();
    result_set
        .extend_from_reader(&Parser::default(), text.as_bytes())
        .expect("Always valid");

    let report = generate(&result_set, &Settings::new("libA".to_owned()));

    let expected = "# Benchmarks

Notes:

- Results are from the latest local run.
- `libA` is used as the **baseline** for comparison.
- **Speedup** shows performance relative to the libA baseline (higher is better).

## FFT Benchmarks

### Baseline: libA

| Size  | ns/op  | MB/s     | B/op | allocs/op |
| ----- | ------ | -------- | ---- | --------- |
| 64    | 120.5  | 850.3    | 128  | 2         |

### libB

| Size  | ns/op  | Speedup vs baseline | MB/s     | B/op   | allocs/op |
| ----- | ------ | ------------------- | -------- | ------ | --------- |
| 64    | 60.25  | **2.00x**           | 1700     | 64     | 1         |

";
    assert_eq!(report, expected);
}

#[test]
fn deterministic() {
    let mut result_set = ResultSet::default();
    for (index, implementation) in ["zeta", "go-fftw", "alpha", "gonum", "takatoh"]
        .into_iter()
        .enumerate()
    {
        for size in [4096, 16, 256] {
            for kind in [Kind::IFFT32, Kind::FFT, Kind::from("DCT"), Kind::IFFT] {
                result_set.insert(record(
                    kind,
                    implementation,
                    size,
                    (index + 1) as f64 * size as f64,
                ));
            }
        }
    }
    let settings = Settings::default();

    assert_eq!(
        generate(&result_set, &settings),
        generate(&result_set, &settings)
    );
    assert_eq!(
        generate(&result_set.clone(), &settings.clone()),
        generate(&result_set, &settings)
    );
}

#[test]
fn kinds_in_canonical_order_with_unknown_first() {
    let mut result_set = ResultSet::default();
    for kind in [
        Kind::IFFT32,
        Kind::FFT32,
        Kind::IFFT,
        Kind::FFT,
        Kind::from("DCT"),
    ] {
        result_set.insert(record(kind, "go-fftw", 64, 10.0));
    }

    let report = generate(&result_set, &Settings::default());
    let positions: Vec<usize> = ["DCT", "FFT", "IFFT", "FFT32", "IFFT32"]
        .into_iter()
        .map(|kind| {
            report
                .find(format!("## {kind} Benchmarks\n").as_str())
                .expect("Section is missing")
        })
        .collect();

    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn baseline_missing_for_kind() {
    let mut result_set = ResultSet::default();
    result_set.insert(record(Kind::FFT, "go-fftw", 64, 10.0));
    result_set.insert(record(Kind::FFT, "gonum", 64, 20.0));
    result_set.insert(record(Kind::IFFT, "gonum", 64, 20.0));
    result_set.insert(record(Kind::IFFT, "takatoh", 64, 30.0));

    let report = generate(&result_set, &Settings::default());

    let ifft = section(report.as_str(), "IFFT");
    assert_eq!(ifft, "### Error: Baseline library 'go-fftw' not found\n\n");

    let fft = section(report.as_str(), "FFT");
    assert!(fft.contains("### Baseline: go-fftw (FFTW3)"));
    assert!(fft.contains("### gonum\n"));
}

#[test]
fn baseline_absent_everywhere() {
    let mut result_set = ResultSet::default();
    result_set.insert(record(Kind::FFT, "gonum", 64, 20.0));
    result_set.insert(record(Kind::FFT32, "gonum", 64, 20.0));

    let report = generate(&result_set, &Settings::new("fftw3".to_owned()));
    for kind in ["FFT", "FFT32"] {
        assert_eq!(
            section(report.as_str(), kind),
            "### Error: Baseline library 'fftw3' not found\n\n"
        );
    }
    assert!(!report.contains('|'));
}

#[test]
fn speedup_not_applicable_without_baseline_size() {
    let mut result_set = ResultSet::default();
    result_set.insert(record(Kind::FFT, "go-fftw", 64, 100.0));
    result_set.insert(record(Kind::FFT, "gonum", 64, 400.0));
    result_set.insert(record(Kind::FFT, "gonum", 128, 800.0));
    result_set.insert(record(Kind::FFT, "gonum", 256, 0.0));

    let report = generate(&result_set, &Settings::default());

    assert!(report.contains("| 64    | 400    | 0.25x               |"));
    assert!(report.contains("| 128   | 800    | N/A                 |"));
    assert!(report.contains("| 256   | 0      | N/A                 |"));
    assert!(!report.contains("NaN"));
    assert!(!report.contains("inf"));
}

#[test]
fn implementation_order() {
    let mut result_set = ResultSet::default();
    for implementation in ["zeta", "gonum", "go-fftw", "beta", "algo-fft", "takatoh"] {
        result_set.insert(record(Kind::FFT, implementation, 64, 10.0));
    }

    let report = generate(&result_set, &Settings::default());
    let positions: Vec<usize> = ["algo-fft", "gonum", "takatoh", "beta", "zeta"]
        .into_iter()
        .map(|implementation| {
            report
                .find(format!("### {implementation}\n").as_str())
                .expect("Table is missing")
        })
        .collect();

    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
    assert!(!report.contains("### go-fftw\n"));
    assert!(!report.contains("### go-dsp-fft"));
}

#[test]
fn custom_preferred_order() {
    let mut result_set = ResultSet::default();
    for implementation in ["a", "b", "c", "base"] {
        result_set.insert(record(Kind::FFT, implementation, 64, 10.0));
    }
    let mut settings = Settings::new("base".to_owned());
    settings.preferred = vec!["c".to_owned(), "base".to_owned(), "c".to_owned()];

    let report = generate(&result_set, &settings);
    let c = report.find("### c\n").expect("Table is missing");
    let a = report.find("### a\n").expect("Table is missing");
    let b = report.find("### b\n").expect("Table is missing");
    assert!(c < a && a < b);
    assert_eq!(report.matches("### c\n").count(), 1);
}

#[test]
fn inverse_headings_are_suffixed() {
    let mut result_set = ResultSet::default();
    for kind in [Kind::FFT, Kind::IFFT, Kind::IFFT32] {
        result_set.insert(record(kind.clone(), "go-fftw", 64, 10.0));
        result_set.insert(record(kind, "gonum", 64, 10.0));
    }

    let report = generate(&result_set, &Settings::default());
    assert!(section(report.as_str(), "FFT").contains("### gonum\n"));
    assert!(section(report.as_str(), "IFFT").contains("### gonum (IFFT)\n"));
    assert!(section(report.as_str(), "IFFT32").contains("### gonum (IFFT32)\n"));
}

#[test]
fn sizes_ascending() {
    let mut result_set = ResultSet::default();
    for size in [32768, 8, 1024, 64] {
        result_set.insert(record(Kind::FFT, "go-fftw", size, 10.0));
        result_set.insert(record(Kind::FFT, "gonum", size, 5.0));
    }

    let report = generate(&result_set, &Settings::default());
    let sizes: Vec<&str> = report
        .lines()
        .filter(|line| {
            line.starts_with("| ") && !line.starts_with("| Size") && !line.starts_with("| -")
        })
        .filter_map(|line| line.split('|').nth(1))
        .map(str::trim)
        .collect();
    assert_eq!(
        sizes,
        vec!["8", "64", "1024", "32768", "8", "64", "1024", "32768"]
    );
}

#[test]
fn empty_result_set() {
    let report = generate(&ResultSet::default(), &Settings::default());
    assert!(report.starts_with("# Benchmarks\n\n"));
    assert!(report.contains("Notes:"));
    assert!(!report.contains("## "));
}

#[test]
fn command_and_notes() {
    let settings = Settings::default()
        .with_command("FFT_BENCH_MAX=1024 GOAMD64=v3 go test -tags=asm -bench . -benchmem ./bench".to_owned())
        .with_notes(vec!["`go-dsp-fft` allocates on every call.".to_owned()]);

    let report = generate(&ResultSet::default(), &settings);
    assert!(report.contains(
        "Command used: `FFT_BENCH_MAX=1024 GOAMD64=v3 go test -tags=asm -bench . -benchmem ./bench`\n\n"
    ));
    assert!(report.contains("- `go-dsp-fft` allocates on every call.\n"));
    assert!(report.contains("- `go-fftw` is used as the **baseline** for comparison.\n"));
}
