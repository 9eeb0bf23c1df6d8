use serde::Serialize;

/// Separator categories. `Random` is a wildcard that resolves to one of the
/// four concrete kinds at render time, not at selection time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeparatorKind {
    Dots,
    Dashes,
    Underscores,
    Numbers,
    Random,
}

impl SeparatorKind {
    pub fn name(self) -> &'static str {
        match self {
            SeparatorKind::Dots => "dots",
            SeparatorKind::Dashes => "dashes",
            SeparatorKind::Underscores => "underscores",
            SeparatorKind::Numbers => "numbers",
            SeparatorKind::Random => "random",
        }
    }
}

/// Effective configuration for one generation run, resolved from the CLI.
/// `seed` is always concrete so any run can be reproduced from its meta echo.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub words: usize,
    pub letter: Option<char>,
    pub caps: bool,
    pub separators: Option<Vec<SeparatorKind>>,
    pub no_dup_letters: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub seed: u64,
    pub quiet: bool,
}

/// Envelope for a successful run. In `--json` mode this object is the whole
/// stdout; in plain mode only `output` and the warnings are printed.
#[derive(Serialize)]
pub struct RunReport {
    pub status: &'static str,
    pub output: String,
    pub warnings: Vec<String>,
    pub meta: RunMeta,
}

/// Echo of the effective configuration and the concrete choices made.
#[derive(Serialize)]
pub struct RunMeta {
    pub mode: &'static str,
    pub words: usize,
    pub seed: Option<u64>,
    pub wordlist: String,
    pub chosen_words: Vec<String>,
    pub separator_spec: Vec<&'static str>,
    pub separators: Vec<String>,
    pub covered_all: bool,
}

impl RunMeta {
    /// Meta stub for the modes that bypass the word pipeline.
    pub fn bare(mode: &'static str, seed: Option<u64>, wordlist: &str) -> Self {
        Self {
            mode,
            words: 0,
            seed,
            wordlist: wordlist.to_string(),
            chosen_words: Vec::new(),
            separator_spec: Vec::new(),
            separators: Vec::new(),
            covered_all: true,
        }
    }
}

/// Envelope for a failed run in `--json` mode.
#[derive(Serialize)]
pub struct ErrorReport {
    pub status: &'static str,
    pub error: String,
}
