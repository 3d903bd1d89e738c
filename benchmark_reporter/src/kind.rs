//!
//! Benchmark kind.
//!

///
/// Benchmark kind, that is the name of the Go benchmark function without the `Benchmark` prefix.
///
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Kind {
    /// Forward transform over `complex128`.
    FFT,
    /// Inverse transform over `complex128`.
    IFFT,
    /// Forward transform over `complex64`.
    FFT32,
    /// Inverse transform over `complex64`.
    IFFT32,
    /// A kind without a canonical position in the report.
    Other(String),
}

impl Kind {
    /// The kinds with a canonical position in the report, in that order.
    pub const CANONICAL: [Self; 4] = [Self::FFT, Self::IFFT, Self::FFT32, Self::IFFT32];

    ///
    /// Returns the report priority.
    ///
    /// Kinds without a canonical position get the lowest value and are rendered first.
    ///
    pub fn priority(&self) -> usize {
        Self::CANONICAL
            .iter()
            .position(|kind| kind == self)
            .map(|index| index + 1)
            .unwrap_or_default()
    }

    ///
    /// Whether the kind measures an inverse transform.
    ///
    pub fn is_inverse(&self) -> bool {
        self.as_str().starts_with("IFFT")
    }

    ///
    /// Returns the benchmark token.
    ///
    pub fn as_str(&self) -> &str {
        match self {
            Self::FFT => "FFT",
            Self::IFFT => "IFFT",
            Self::FFT32 => "FFT32",
            Self::IFFT32 => "IFFT32",
            Self::Other(token) => token.as_str(),
        }
    }

    ///
    /// Sorts kinds in the report order: by priority, then by token.
    ///
    pub fn sort(kinds: &mut [&Self]) {
        kinds.sort_by(|a, b| {
            a.priority()
                .cmp(&b.priority())
                .then_with(|| a.as_str().cmp(b.as_str()))
        });
    }
}

impl From<&str> for Kind {
    fn from(token: &str) -> Self {
        match token {
            "FFT" => Self::FFT,
            "IFFT" => Self::IFFT,
            "FFT32" => Self::FFT32,
            "IFFT32" => Self::IFFT32,
            token => Self::Other(token.to_owned()),
        }
    }
}

impl From<String> for Kind {
    fn from(token: String) -> Self {
        Self::from(token.as_str())
    }
}

impl From<Kind> for String {
    fn from(kind: Kind) -> Self {
        kind.to_string()
    }
}

impl std::str::FromStr for Kind {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        if string.is_empty() || string.contains(['/', ' ', '\t']) {
            anyhow::bail!(
                "Invalid benchmark kind `{string}`. Known kinds: {}",
                Self::CANONICAL
                    .iter()
                    .map(|kind| kind.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            );
        }
        Ok(Self::from(string))
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
