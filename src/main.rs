// Copyright © 2024 DocNav. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # DocNav CLI
//!
//! This is the main entry point for the DocNav command-line interface.
//! It initializes the logger from the verbosity flags and dispatches to
//! the requested subcommand.

use anyhow::Context;
use docnav::cli;
use env_logger::Env;
use log::{debug, info};

/// Maps the `-v` count to a default log filter. `RUST_LOG` still wins.
fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Parses the command line and runs the selected subcommand.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded, fails
/// validation, or the output cannot be produced.
fn run() -> Result<(), anyhow::Error> {
    let matches = cli::build().get_matches();

    env_logger::Builder::from_env(
        Env::default().default_filter_or(log_level(matches.get_count("verbose"))),
    )
    .init();
    info!("Starting DocNav {}", cli::VERSION);

    let command = matches.subcommand_name().unwrap_or_default().to_string();
    cli::execute(&matches)
        .with_context(|| format!("`{}` failed", command))?;

    debug!("DocNav completed successfully");
    Ok(())
}

/// The main entry point for the DocNav CLI.
fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
