//!
//! Benchmark input.
//!


pub mod error;
pub mod parser;

use std::path::Path;
use std::path::PathBuf;

use crate::model::result_set::ResultSet;

use self::error::Error as InputError;
use self::parser::Parser;

///
/// Benchmark input, saved instead of being produced by a live benchmark run.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Raw `go test -bench` output.
    Text(PathBuf),
    /// A result set saved in the JSON output format.
    Json(PathBuf),
    /// Raw `go test -bench` output piped to the standard input.
    Stdin,
}

impl Input {
    /// The path denoting the standard input.
    pub const STDIN_PATH: &'static str = "-";

    ///
    /// Resolves the input paths provided by the user.
    ///
    /// If only one path is provided and it is a directory, it is searched for text and JSON files.
    ///
    pub fn resolve(paths: Vec<PathBuf>) -> anyhow::Result<Vec<Self>> {
        if paths.len() == 1 && paths[0].is_dir() {
            let directory = paths[0].to_string_lossy();
            let mut resolved = Vec::new();
            for extension in ["txt", "json"] {
                let resolution_pattern = format!("{directory}/**/*.{extension}");
                resolved.extend(
                    glob::glob(resolution_pattern.as_str())?
                        .filter_map(Result::ok)
                        .map(Self::from),
                );
            }
            if resolved.is_empty() {
                anyhow::bail!("No `.txt` or `.json` files found in directory {directory:?}");
            }
            return Ok(resolved);
        }

        Ok(paths.into_iter().map(Self::from).collect())
    }

    ///
    /// Reads the input into the result set.
    ///
    /// Returns the number of records read.
    ///
    pub fn read_into(
        &self,
        parser: &Parser,
        result_set: &mut ResultSet,
    ) -> Result<usize, InputError> {
        match self {
            Self::Text(path) => {
                let bytes = Self::read(path.as_path())?;
                result_set
                    .extend_from_reader(parser, bytes.as_slice())
                    .map_err(|error| InputError::Reading {
                        error,
                        path: path.to_owned(),
                    })
            }
            Self::Json(path) => {
                let bytes = Self::read(path.as_path())?;
                let saved: ResultSet =
                    serde_json::from_slice(bytes.as_slice()).map_err(|error| InputError::Parsing {
                        error,
                        path: path.to_owned(),
                    })?;
                let count = saved.count();
                result_set.extend(saved);
                Ok(count)
            }
            Self::Stdin => {
                let stdin = std::io::stdin();
                result_set
                    .extend_from_reader(parser, stdin.lock())
                    .map_err(|error| InputError::Reading {
                        error,
                        path: PathBuf::from(Self::STDIN_PATH),
                    })
            }
        }
    }

    ///
    /// Reads a whole file as raw bytes, rejecting empty ones.
    ///
    fn read(path: &Path) -> Result<Vec<u8>, InputError> {
        let bytes = std::fs::read(path).map_err(|error| InputError::Reading {
            error,
            path: path.to_path_buf(),
        })?;
        if bytes.is_empty() {
            return Err(InputError::EmptyFile {
                path: path.to_path_buf(),
            });
        }
        Ok(bytes)
    }
}

impl From<PathBuf> for Input {
    fn from(path: PathBuf) -> Self {
        if path.as_os_str() == Self::STDIN_PATH {
            return Self::Stdin;
        }
        match path.extension().and_then(|extension| extension.to_str()) {
            Some(extension) if extension.eq_ignore_ascii_case("json") => Self::Json(path),
            _ => Self::Text(path),
        }
    }
}

impl std::fmt::Display for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(path) | Self::Json(path) => write!(f, "{}", path.display()),
            Self::Stdin => f.write_str("<stdin>"),
        }
    }
}
