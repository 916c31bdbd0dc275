#![deny(unsafe_code)]
//! `hello`: prints a two-line greeting to stdout.
//!
//! Logging goes to stderr and is silent at the default level, so stdout
//! carries only the greeting.

mod error;

use clap::Parser;
use error::CliError;
use log::{debug, info, Level};
use std::io::{self, Write};
use std::process;

/// Lines written to stdout, in order.
const GREETING: [&str; 2] = ["Hello, world!", "Greetings from Illinois!"];

#[derive(Parser)]
#[command(name = "hello", version, about = "Prints a greeting from Illinois")]
struct Cli {
    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Maps the `-v` count to a log level. Warn is the floor.
fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::Warn,
        1 => Level::Info,
        2 => Level::Debug,
        _ => Level::Trace,
    }
}

/// Writes the greeting lines to `out`.
fn greet(out: &mut impl Write) -> Result<(), CliError> {
    for line in GREETING {
        writeln!(out, "{line}")?;
        debug!("wrote {line:?}");
    }
    out.flush()?;
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    let level = log_level(cli.verbose);
    simple_logger::init_with_level(level)?;
    info!("log level: {level}");

    let stdout = io::stdout();
    greet(&mut stdout.lock())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        process::exit(e.exit_code());
    }
}
