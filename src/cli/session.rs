//! Interactive watch session.
//!
//! Shows the table, asks for a movie number, marks it watched and repeats
//! until the user types `quit` (or input ends), then prints the summary.

use crate::cli::command::Command;
use crate::core::table::{print_table, TableLayout};
use crate::models::movie::Collection;
use crate::{Error, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

pub const WATCH_PROMPT: &str = "Enter the movie number to watch (or \"quit\"): ";
pub const FILE_PROMPT: &str = "Enter the movie file name: ";

/// Figures reported when the session ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Sum of all runtimes, in minutes.
    pub total_runtime: u64,
    /// Title of the least watched movie, `None` for an empty collection.
    pub least_watched: Option<String>,
    /// Sum of all watch counts.
    pub total_views: u64,
}

impl Summary {
    pub fn from_collection(collection: &Collection) -> Self {
        Self {
            total_runtime: collection.total_runtime(),
            least_watched: collection.least_watched().map(|(_, m)| m.title.clone()),
            total_views: collection.total_watch_count(),
        }
    }

    pub fn print<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{} {} minutes", "Total runtime:".bold(), self.total_runtime)?;
        match &self.least_watched {
            Some(title) => writeln!(out, "{} {}", "Least watched movie:".bold(), title)?,
            None => writeln!(out, "{}", "No movies in the collection.".yellow())?,
        }
        writeln!(out, "{} {}", "Total views:".bold(), self.total_views)
    }
}

/// One interactive session over a borrowed collection.
pub struct Session<'a, R, W> {
    collection: &'a mut Collection,
    layout: TableLayout,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(collection: &'a mut Collection, input: R, output: W) -> Self {
        Self {
            collection,
            layout: TableLayout::default(),
            input,
            output,
        }
    }

    pub fn with_layout(mut self, layout: TableLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Run until `quit` or end of input, print the summary and return it.
    pub fn run(&mut self) -> Result<Summary> {
        let mut redisplay = true;

        loop {
            if redisplay {
                print_table(&mut self.output, self.collection, &self.layout)?;
                writeln!(self.output)?;
            }

            write!(self.output, "{}", WATCH_PROMPT)?;
            self.output.flush()?;

            let mut raw = Vec::new();
            if self.input.read_until(b'\n', &mut raw)? == 0 {
                // End of input counts as quit.
                writeln!(self.output)?;
                tracing::debug!("Input closed, ending session");
                break;
            }

            // Invalid UTF-8 is decoded lossily and lands in `Command::Invalid`.
            let line = String::from_utf8_lossy(&raw);
            match Command::parse(&line) {
                Command::Quit => break,
                Command::Watch(index) => {
                    redisplay = true;
                    match self.collection.watch(index) {
                        Ok(movie) => writeln!(
                            self.output,
                            "{} \"{}\" ({} times).",
                            "Watched".green(),
                            movie.title,
                            movie.watch_count
                        )?,
                        Err(e @ Error::InvalidSelection { .. }) => {
                            tracing::warn!("{}", e);
                            writeln!(self.output, "{}", format!("No such movie: {}", index).yellow())?;
                        }
                        Err(e) => return Err(e),
                    }
                }
                Command::Invalid(text) => {
                    redisplay = false;
                    tracing::warn!("Rejected input {:?}", text);
                    writeln!(self.output, "{}", format!("Invalid input: \"{}\"", text).yellow())?;
                }
            }
        }

        let summary = Summary::from_collection(self.collection);
        summary.print(&mut self.output)?;
        self.output.flush()?;
        Ok(summary)
    }
}

/// Ask for the movie file name on `output` and read it from `input`.
pub fn prompt_filename<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<PathBuf> {
    write!(output, "{}", FILE_PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let name = line.trim();
    if name.is_empty() {
        return Err(Error::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "no file name given",
        )));
    }
    Ok(PathBuf::from(name))
}
