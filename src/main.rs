use std::io;
use std::path::PathBuf;

use clap::Parser;
use record_verifier::{Context, OutputFormat, Repl};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Check that a value is listed against a key in a CSV lookup table.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to the lookup table (first column is the key).
    #[arg(long, env = "RECORD_VERIFIER_SOURCE")]
    source: PathBuf,
    /// Verify a single `key,value` pair and exit instead of prompting.
    #[arg(long)]
    query: Option<String>,
    /// How verdicts are printed.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// More log output on stderr (-v, -vv, -vvv). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let ctx = Context::new(args.source).with_format(args.format);
    info!(source = %ctx.source.display(), format = ?ctx.format, "starting");
    let repl = Repl::new(&ctx);

    let res = match args.query.as_deref() {
        Some(line) => repl.handle_line(line, &mut io::stdout().lock()).map(|_| ()),
        None => repl.run(io::stdin().lock(), io::stdout().lock()),
    };

    if let Err(e) = res {
        eprintln!("I/O error: {e}");
        std::process::exit(1);
    }
}
