//!
//! The benchmark reporter arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The benchmark reporter arguments.
///
#[derive(Debug, Parser)]
#[command(about, version, long_about = None)]
pub struct Arguments {
    /// Suppresses the terminal output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Saved benchmark output to report instead of running the benchmarks.
    /// `.json` files are read as saved results, `-` reads the standard input.
    /// If only one path is provided and it is a directory, it is searched for `.txt` and `.json` files.
    pub input_paths: Vec<PathBuf>,

    /// The largest benchmarked input size, passed as `FFT_BENCH_MAX`.
    #[arg(long, default_value_t = 32768)]
    pub max_size: u64,

    /// The implementation every other one is compared against.
    #[arg(long, default_value_t = benchmark_reporter::ReportSettings::DEFAULT_BASELINE.to_owned())]
    pub baseline: String,

    /// The amd64 microarchitecture level, passed as `GOAMD64`.
    #[arg(long, default_value = "v3")]
    pub goamd64: String,

    /// The go build tags.
    #[arg(long, default_value = "asm")]
    pub tags: String,

    /// The benchmark package directory.
    /// Is `./bench` by default, or `../../bench` when run from `cmd/benchrunner`.
    #[arg(long)]
    pub bench_dir: Option<String>,

    /// The output file.
    #[arg(short, long, default_value = "BENCHMARKS.md")]
    pub output: PathBuf,

    /// Prints the report to the standard output instead of writing the output file.
    #[arg(long)]
    pub show: bool,

    /// Benchmark output format: `markdown`, `csv`, `json`, or `xlsx`.
    #[arg(long, default_value_t = benchmark_reporter::OutputFormat::Markdown)]
    pub output_format: benchmark_reporter::OutputFormat,

    /// Additional benchmark kinds to accept, besides `FFT`, `IFFT`, `FFT32`, and `IFFT32`.
    #[arg(long = "kind", value_parser = <benchmark_reporter::Kind as std::str::FromStr>::from_str)]
    pub kinds: Vec<benchmark_reporter::Kind>,

    /// Additional notes for the report header.
    #[arg(long = "note")]
    pub notes: Vec<String>,

    /// Reports the results collected so far if the benchmark command fails.
    #[arg(long)]
    pub keep_partial: bool,
}

impl Arguments {
    ///
    /// Validates the arguments.
    ///
    pub fn validate(arguments: Self) -> anyhow::Result<Self> {
        if arguments.show && arguments.output_format == benchmark_reporter::OutputFormat::Xlsx {
            anyhow::bail!("The `xlsx` format cannot be printed with `--show`. Use `--output` instead.");
        }
        if arguments.keep_partial && !arguments.input_paths.is_empty() {
            anyhow::bail!("`--keep-partial` only applies when running the benchmarks.");
        }
        if arguments.baseline.is_empty() {
            anyhow::bail!("The baseline implementation name must not be empty.");
        }

        Ok(arguments)
    }
}
