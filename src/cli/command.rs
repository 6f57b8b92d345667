//! Parsing of a single line typed at the watch prompt.

/// What the user asked for at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Leave the session and print the summary.
    Quit,
    /// Mark the movie at this index as watched.
    Watch(i64),
    /// Anything else, trimmed.
    Invalid(String),
}

impl Command {
    /// Parse one input line. Matching of `quit` is exact and case-sensitive.
    pub fn parse(line: &str) -> Self {
        let input = line.trim();
        if input == "quit" {
            return Command::Quit;
        }

        match input.parse::<i64>() {
            Ok(index) => Command::Watch(index),
            Err(_) => Command::Invalid(input.to_string()),
        }
    }
}
