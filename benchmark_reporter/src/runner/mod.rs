//!
//! The benchmark producer runner.
//!

#[cfg(test)]
mod tests;

pub mod error;

use std::io::BufRead;
use std::path::Path;
use std::process::Child;
use std::process::ChildStdout;
use std::process::Command;
use std::process::Stdio;

use colored::Colorize;

use crate::input::parser::Parser;
use crate::model::result_set::ResultSet;

use self::error::Error as RunnerError;

///
/// Runs the benchmark producer and streams its output into a result set.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Runner {
    /// The executable.
    pub program: String,
    /// The command line arguments.
    pub arguments: Vec<String>,
    /// The variables added to the inherited environment.
    pub environment: Vec<(String, String)>,
    /// Whether to suppress echoing benchmark lines.
    pub quiet: bool,
}

impl Runner {
    /// The environment variable limiting the largest benchmarked size.
    pub const MAX_SIZE_VARIABLE: &'static str = "FFT_BENCH_MAX";

    /// The environment variable selecting the amd64 microarchitecture level.
    pub const GOAMD64_VARIABLE: &'static str = "GOAMD64";

    /// The benchmark package relative to the project root.
    pub const BENCH_DIR: &'static str = "./bench";

    /// The benchmark package relative to the runner's own package.
    pub const NESTED_BENCH_DIR: &'static str = "../../bench";

    /// The runner's own package relative to the project root.
    pub const NESTED_DIR_SUFFIX: &'static str = "cmd/benchrunner";

    /// The prefix of the lines echoed while streaming.
    const ECHO_PREFIX: &'static str = "Benchmark";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(program: String, arguments: Vec<String>) -> Self {
        Self {
            program,
            arguments,
            environment: vec![],
            quiet: false,
        }
    }

    ///
    /// Creates the runner of the `go test` benchmarks.
    ///
    pub fn go_test(max_size: u64, goamd64: &str, tags: &str, bench_dir: &str) -> Self {
        Self::new(
            "go".to_owned(),
            vec![
                "test".to_owned(),
                "-bench".to_owned(),
                ".".to_owned(),
                "-benchmem".to_owned(),
                "-run".to_owned(),
                "^$".to_owned(),
                format!("-tags={tags}"),
                bench_dir.to_owned(),
            ],
        )
        .with_environment(Self::MAX_SIZE_VARIABLE, max_size.to_string())
        .with_environment(Self::GOAMD64_VARIABLE, goamd64.to_owned())
    }

    ///
    /// Adds an environment variable.
    ///
    pub fn with_environment(mut self, name: &str, value: String) -> Self {
        self.environment.push((name.to_owned(), value));
        self
    }

    ///
    /// Sets the quiet mode.
    ///
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    ///
    /// Picks the benchmark package directory for the current directory.
    ///
    pub fn resolve_bench_dir(current_dir: &Path) -> &'static str {
        if current_dir.join(Self::BENCH_DIR).exists() {
            return Self::BENCH_DIR;
        }
        if current_dir.ends_with(Self::NESTED_DIR_SUFFIX) {
            return Self::NESTED_BENCH_DIR;
        }
        Self::BENCH_DIR
    }

    ///
    /// Returns the command line with the environment prepended, as a shell would accept it.
    ///
    pub fn command_line(&self) -> String {
        self.environment
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .chain(std::iter::once(self.program.clone()))
            .chain(self.arguments.iter().cloned())
            .collect::<Vec<String>>()
            .join(" ")
    }

    ///
    /// Runs the process, feeding every line of its standard output to the parser.
    ///
    /// Records are inserted as they arrive, so `result_set` keeps the partial results
    /// if the process fails. Returns the number of recognized lines.
    ///
    pub fn run(&self, parser: &Parser, result_set: &mut ResultSet) -> Result<usize, RunnerError> {
        let mut command = Command::new(self.program.as_str());
        command.args(self.arguments.iter());
        command.envs(
            self.environment
                .iter()
                .map(|(name, value)| (name.as_str(), value.as_str())),
        );
        command.stdout(Stdio::piped());

        let mut child = command.spawn().map_err(|error| RunnerError::Spawning {
            error,
            command: self.command_line(),
        })?;
        let stdout = match child.stdout.take() {
            Some(stdout) => stdout,
            None => {
                Self::terminate(&mut child);
                return Err(RunnerError::OutputUnavailable {
                    command: self.command_line(),
                });
            }
        };

        let recognized = match self.stream(stdout, parser, result_set) {
            Ok(recognized) => recognized,
            Err(error) => {
                Self::terminate(&mut child);
                return Err(RunnerError::Reading { error });
            }
        };

        let status = child
            .wait()
            .map_err(|error| RunnerError::Reading { error })?;
        if !status.success() {
            return Err(RunnerError::Failed { status });
        }

        Ok(recognized)
    }

    ///
    /// Feeds the process output to the parser line by line.
    ///
    fn stream(
        &self,
        stdout: ChildStdout,
        parser: &Parser,
        result_set: &mut ResultSet,
    ) -> std::io::Result<usize> {
        let mut recognized = 0;
        for line in std::io::BufReader::new(stdout).split(b'\n') {
            let line = line?;
            let line = ResultSet::decode_line(line.as_slice());
            if !self.quiet && line.starts_with(Self::ECHO_PREFIX) {
                eprintln!("  {}", line.dimmed());
            }
            if result_set.extend_from_line(parser, &line) {
                recognized += 1;
            }
        }
        Ok(recognized)
    }

    ///
    /// Kills the process and reaps it.
    ///
    /// Errors are ignored, the process may have exited already.
    ///
    fn terminate(child: &mut Child) {
        let _ = child.kill();
        let _ = child.wait();
    }
}
