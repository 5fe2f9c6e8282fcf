pub mod errors;
pub mod context;
pub mod comparison;
pub mod verifier;
pub mod command;
pub mod repl;

pub use command::Command;
pub use context::{Context, OutputFormat};
pub use errors::{Result, VerifyError};
pub use repl::Repl;
pub use verifier::{verify, Outcome, RecordVerifier, Verdict};
