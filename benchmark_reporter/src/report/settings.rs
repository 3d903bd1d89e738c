//!
//! The report settings.
//!

///
/// The report settings.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// The implementation every other one is compared against.
    pub baseline: String,
    /// The producer command line shown in the header.
    pub command: Option<String>,
    /// Additional notes, one bullet each.
    pub notes: Vec<String>,
    /// Implementations rendered first, in this order.
    pub preferred: Vec<String>,
}

impl Settings {
    /// The default baseline implementation.
    pub const DEFAULT_BASELINE: &'static str = "go-fftw";

    /// The implementations rendered first by default.
    pub const PREFERRED_IMPLEMENTATIONS: [&'static str; 4] =
        ["algo-fft", "go-dsp-fft", "gonum", "takatoh"];

    /// Display names of well-known implementations.
    const LABELS: [(&'static str, &'static str); 1] = [("go-fftw", "go-fftw (FFTW3)")];

    ///
    /// A shortcut constructor.
    ///
    pub fn new(baseline: String) -> Self {
        Self {
            baseline,
            command: None,
            notes: vec![],
            preferred: Self::PREFERRED_IMPLEMENTATIONS
                .into_iter()
                .map(str::to_owned)
                .collect(),
        }
    }

    ///
    /// Sets the producer command line.
    ///
    pub fn with_command(mut self, command: String) -> Self {
        self.command = Some(command);
        self
    }

    ///
    /// Appends notes.
    ///
    pub fn with_notes(mut self, notes: Vec<String>) -> Self {
        self.notes.extend(notes);
        self
    }

    ///
    /// Returns the baseline heading, which may be more descriptive than its name.
    ///
    pub fn baseline_label(&self) -> &str {
        Self::LABELS
            .iter()
            .find_map(|(name, label)| {
                if *name == self.baseline.as_str() {
                    Some(*label)
                } else {
                    None
                }
            })
            .unwrap_or(self.baseline.as_str())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASELINE.to_owned())
    }
}
