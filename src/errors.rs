use std::path::PathBuf; // Path of the table that failed to open

use thiserror::Error; // Derive macro for `std::error::Error` + `Display`

/// Everything that can go wrong between reading a line and printing a verdict.
#[derive(Debug, Error)] // `Debug` for logs, `Error` for `?` and `#[source]` chaining
pub enum VerifyError {
    /// The lookup table could not be opened.
    #[error("cannot open {}: {source}", .path.display())] // e.g. "cannot open meds.csv: No such file or directory"
    SourceUnavailable {
        // Table path as given on the command line or in the environment
        path: PathBuf,
        // Underlying OS error from `File::open`
        #[source]
        source: std::io::Error,
    },

    /// Any other read or CSV failure while scanning the table.
    #[error("{0}")] // Message is shown to the user after "Error: "
    Unexpected(String),

    /// A line of user input that is neither `exit` nor two comma-separated terms.
    #[error("expected two values separated by a comma")]
    MalformedInput,
}

// CSV reader failures (bad UTF-8, I/O mid-scan) surface as `Unexpected`
impl From<csv::Error> for VerifyError {
    fn from(err: csv::Error) -> Self {
        VerifyError::Unexpected(err.to_string())
    }
}

// Type alias for results that use `VerifyError` as the error type
pub type Result<T> = std::result::Result<T, VerifyError>;
