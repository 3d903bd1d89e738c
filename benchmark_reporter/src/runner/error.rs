//!
//! Benchmark runner error.
//!

///
/// Benchmark runner error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The process could not be started.
    #[error("Starting `{command}`: {error}")]
    Spawning {
        /// The underlying IO error.
        error: std::io::Error,
        /// The command line.
        command: String,
    },
    /// The process output could not be captured.
    #[error("Capturing the output of `{command}`")]
    OutputUnavailable {
        /// The command line.
        command: String,
    },
    /// The process output could not be read.
    #[error("Reading the benchmark output: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
    },
    /// The process exited unsuccessfully.
    #[error("Benchmark command failed with {status}")]
    Failed {
        /// The process exit status.
        status: std::process::ExitStatus,
    },
}

impl Error {
    ///
    /// Whether the records streamed before the error are still worth reporting.
    ///
    pub fn keeps_partial_results(&self) -> bool {
        matches!(self, Self::Failed { .. } | Self::Reading { .. })
    }
}
