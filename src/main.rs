//! Movie Tracker CLI
//!
//! Loads a movie list, lets the user mark movies as watched and prints a
//! summary on exit.

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use movie_tracker::cli::{args::Cli, session};
use movie_tracker::core::loader;
use movie_tracker::models::config;
use std::io::{self, Write};

fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{} {:#}", "[ERROR]".red(), e);
        let code = e
            .downcast_ref::<movie_tracker::Error>()
            .map(|e| e.exit_code())
            .unwrap_or(1);
        std::process::exit(code);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = config::load_config(cli.config.as_deref())?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();

    let path = match &cli.file {
        Some(path) => path.clone(),
        None => session::prompt_filename(&mut input, &mut output)
            .context("Failed to read the movie file name")?,
    };

    let mut collection = loader::load_movies(&path, config.capacity)?;
    writeln!(output)?;

    session::Session::new(&mut collection, input, output)
        .with_layout(config.table)
        .run()?;

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("movie_tracker=debug")
    } else {
        EnvFilter::new("movie_tracker=warn")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(io::stderr),
        )
        .with(filter)
        .init();
}
