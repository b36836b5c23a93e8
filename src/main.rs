//! rfind CLI entry point.
//!
//! Usage:
//!   rfind [OPTIONS] <PATTERN> <PATH>
//!
//! Logging goes to stderr and follows `RUST_LOG` (e.g. `RUST_LOG=rfind=debug`).

mod cli;
mod output;

use std::io::{self, BufWriter};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::Cli;
use output::{Palette, PrintSink};
use rfind::Pattern;

fn main() -> ExitCode {
    // Initialize tracing (respects RUST_LOG env var)
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // --help and --version come through here too
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let palette = cli.color.resolve();
    match run(cli, palette) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", palette.error(&format!("rfind: {e:#}")));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, palette: Palette) -> Result<()> {
    for flag in cli.inert_flags() {
        debug!(flag, "flag accepted but has no effect");
    }

    // Compile before touching the filesystem.
    let pattern = Pattern::new(&cli.pattern).context("cannot use pattern")?;
    debug!(pattern = pattern.as_str(), "pattern compiled");

    let stdout = io::stdout();
    let mut sink = PrintSink::new(BufWriter::new(stdout.lock()), cli.print0, palette);

    let stats = rfind::search()
        .root(&cli.path)
        .with_matcher(pattern)
        .run_into(&mut sink)?;
    sink.finish().context("cannot write results")?;

    debug!(
        matches = stats.matches,
        unreadable = stats.unreadable,
        elapsed_ms = stats.duration.as_millis() as u64,
        "search complete"
    );
    Ok(())
}
