//! Command line argument definitions.

use clap::Parser;
use std::path::PathBuf;

/// Movie Tracker - Browse your movie list and keep track of what you watched
#[derive(Parser, Debug)]
#[command(name = "movie-tracker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Movie file to load (prompted for when omitted)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to config.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
