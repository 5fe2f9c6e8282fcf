use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::command::Command;
use crate::context::{Context, OutputFormat};
use crate::verifier::{RecordVerifier, Verdict};

pub const PROMPT: &str = "Enter two values separated by comma (e.g., acne,ziana) or 'exit' to quit: ";
pub const USAGE: &str = "Error: Please enter two values separated by a comma or 'exit'";
pub const GOODBYE: &str = "Exiting program...";

/// Whether the loop should keep reading after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Read-eval-print loop over any line source and sink.
pub struct Repl {
    verifier: RecordVerifier,
    format: OutputFormat,
}

impl Repl {
    pub fn new(ctx: &Context) -> Self {
        Self { verifier: RecordVerifier::new(ctx.source.clone()), format: ctx.format }
    }

    /// Prompt, read, dispatch, repeat until `exit` or end of input.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> io::Result<()> {
        let mut buf = Vec::new();
        loop {
            write!(output, "{PROMPT}")?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                debug!("end of input");
                writeln!(output)?;
                return Ok(());
            }
            // Non-UTF-8 input is malformed input, not a fatal error.
            let Ok(line) = std::str::from_utf8(&buf) else {
                debug!("input line is not valid UTF-8");
                writeln!(output, "{USAGE}")?;
                continue;
            };
            if self.handle_line(line, &mut output)? == Flow::Stop {
                return Ok(());
            }
        }
    }

    /// Handle a single line of input. Used directly for one-shot queries.
    pub fn handle_line<W: Write>(&self, line: &str, output: &mut W) -> io::Result<Flow> {
        match Command::parse(line) {
            Ok(Command::Exit) => {
                writeln!(output, "{GOODBYE}")?;
                Ok(Flow::Stop)
            }
            Ok(Command::Query { key, value }) => {
                let verdict = self.verifier.verify(&key, &value);
                self.emit(&verdict, output)?;
                Ok(Flow::Continue)
            }
            Err(e) => {
                debug!(error = %e, "rejected input");
                writeln!(output, "{USAGE}")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn emit<W: Write>(&self, verdict: &Verdict, output: &mut W) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(output, "{verdict}"),
            OutputFormat::Json => {
                serde_json::to_writer(&mut *output, verdict)?;
                writeln!(output)
            }
        }
    }
}
