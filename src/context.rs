use std::path::PathBuf; // Location of the lookup table

use clap::ValueEnum; // Lets `--format` parse straight into `OutputFormat`

/// How verdicts are written to the terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The bare message line.
    #[default]
    Text,
    /// One JSON object per verdict.
    Json,
}

/// Runtime options shared by the REPL and one-shot mode.
#[derive(Clone, Debug)]
pub struct Context {
    /// Path to the lookup table. Re-read on every query.
    pub source: PathBuf,
    /// Output format for verdicts (`text` unless `--format json`).
    pub format: OutputFormat,
}

impl Context {
    // Text output by default; the binary overrides it from `--format`
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self { source: source.into(), format: OutputFormat::default() }
    }

    // Builder-style setter, consumed and returned by value
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}
