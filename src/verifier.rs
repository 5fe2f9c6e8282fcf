use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::comparison::Needle;
use crate::errors::{Result, VerifyError};

/// What a successful scan of the table found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The value appears in the first row keyed by the key term.
    Verified,
    /// A row with the key exists but the value is not among its fields.
    ValueMismatch,
    /// No row's first field matches the key term.
    KeyNotFound,
}

/// The user-facing result of one lookup. Every failure ends up here as a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Verified,
    ValueMismatch,
    KeyNotFound,
    SourceUnavailable,
    UnexpectedFailure(String),
}

impl Verdict {
    /// Stable machine name, used in JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            Verdict::Verified => "verified",
            Verdict::ValueMismatch => "value_mismatch",
            Verdict::KeyNotFound => "key_not_found",
            Verdict::SourceUnavailable => "source_unavailable",
            Verdict::UnexpectedFailure(_) => "unexpected_failure",
        }
    }

    pub fn is_verified(&self) -> bool {
        matches!(self, Verdict::Verified)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Verified => f.write_str("Medication verified"),
            Verdict::ValueMismatch => f.write_str("Error Wrong Medication"),
            Verdict::KeyNotFound => f.write_str("No disease doesn't exist in the DB"),
            Verdict::SourceUnavailable => f.write_str("Error: CSV file not found"),
            Verdict::UnexpectedFailure(msg) => write!(f, "Error: {msg}"),
        }
    }
}

impl From<Outcome> for Verdict {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Verified => Verdict::Verified,
            Outcome::ValueMismatch => Verdict::ValueMismatch,
            Outcome::KeyNotFound => Verdict::KeyNotFound,
        }
    }
}

impl From<Result<Outcome>> for Verdict {
    fn from(res: Result<Outcome>) -> Self {
        match res {
            Ok(outcome) => outcome.into(),
            Err(VerifyError::SourceUnavailable { .. }) => Verdict::SourceUnavailable,
            Err(e) => Verdict::UnexpectedFailure(e.to_string()),
        }
    }
}

impl Serialize for Verdict {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Report<'a> {
            outcome: &'a str,
            message: String,
        }
        Report { outcome: self.kind(), message: self.to_string() }.serialize(serializer)
    }
}

/// Looks up (key, value) pairs in a CSV table whose first column is the key
/// and whose remaining columns are the values permitted for that key.
///
/// The table is re-read on every call; nothing is cached.
#[derive(Debug, Clone)]
pub struct RecordVerifier {
    source: PathBuf,
}

impl RecordVerifier {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self { source: source.into() }
    }

    /// Scan the table once. Only the first row whose key matches is
    /// considered; later rows with the same key are never consulted.
    pub fn check(&self, key: &str, value: &str) -> Result<Outcome> {
        let file = File::open(&self.source).map_err(|source| VerifyError::SourceUnavailable {
            path: self.source.clone(),
            source,
        })?;
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let key = Needle::new(key);
        let value = Needle::new(value);
        debug!(source = %self.source.display(), key = key.as_str(), value = value.as_str(), "scanning table");

        for (index, record) in reader.records().enumerate() {
            let record = record?;
            let Some(first) = record.get(0) else { continue };
            if !key.matches(first) {
                continue;
            }
            let found = record.iter().skip(1).any(|field| value.matches(field));
            debug!(row = index + 1, found, "key matched");
            return Ok(if found { Outcome::Verified } else { Outcome::ValueMismatch });
        }
        Ok(Outcome::KeyNotFound)
    }

    /// Like [`check`](Self::check), but never fails: errors become verdicts.
    pub fn verify(&self, key: &str, value: &str) -> Verdict {
        let res = self.check(key, value);
        if let Err(e) = &res {
            warn!(source = %self.source.display(), error = %e, "lookup failed");
        }
        let verdict = Verdict::from(res);
        info!(outcome = verdict.kind(), "lookup finished");
        verdict
    }
}

/// Convenience: one-off lookup without keeping a verifier around.
pub fn verify(source: impl AsRef<Path>, key: &str, value: &str) -> Verdict {
    RecordVerifier::new(source.as_ref().to_path_buf()).verify(key, value)
}
