// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! CLI entry point (spec §6.3): read a `planar_code` stream from stdin
//! or a file, decide the path-Hamiltonian property for each graph, and
//! either print a counting-mode summary or re-emit the matching records.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;

use pathham::driver;

/// Decide whether plane triangulations admit a path-Hamiltonian cycle.
#[derive(Parser)]
#[command(name = "pathham")]
struct Args {
    /// Filter mode: re-emit matching records instead of printing counts.
    #[arg(short = 'f', long = "filter")]
    filter: bool,

    /// Invert the match sense in filter mode.
    #[arg(short = 'i', long = "invert")]
    invert: bool,

    /// Read from this file instead of stdin.
    input: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(
            "pathham=info"
                .parse()
                .expect("static directive always parses"),
        ))
        .with_target(false)
        .init();

    // clap's default exit code for a usage error is 2; spec §6.3 requires
    // 1 on an unrecognised option or malformed input, so parse manually
    // instead of letting `Parser::parse` call `process::exit` for us.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => std::process::exit(0),
                _ => std::process::exit(1),
            }
        }
    };

    let input = match &args.input {
        Some(path) => fs::read(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut bytes = Vec::new();
            io::stdin()
                .read_to_end(&mut bytes)
                .context("reading stdin")?;
            bytes
        }
    };

    let stdout = io::stdout();
    let outcome = driver::run(&input, args.filter, args.invert, stdout.lock())
        .context("processing planar_code stream")?;

    if !args.filter {
        let mut stderr = io::stderr();
        writeln!(stderr, "Read {} graphs.", outcome.total)?;
        writeln!(
            stderr,
            "{} matched, {} did not.",
            outcome.hits,
            outcome.misses()
        )?;
    }

    tracing::info!(
        total = outcome.total,
        hits = outcome.hits,
        misses = outcome.misses(),
        "done"
    );

    Ok(())
}
