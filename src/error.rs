//! Error types for the movie tracker.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the movie tracker.
#[derive(Error, Debug)]
pub enum Error {
    // Load errors
    #[error("Could not open file for reading: {path}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid movie count: {0:?}")]
    MalformedCount(String),

    #[error("Movie {record}: invalid {field} value {value:?}")]
    MalformedRecord {
        record: usize,
        field: &'static str,
        value: String,
    },

    #[error("Movie {record}: unexpected end of file while reading {field}")]
    UnexpectedEof { record: usize, field: &'static str },

    #[error("File lists {requested} movies but the collection holds at most {capacity}")]
    CapacityExceeded { requested: usize, capacity: usize },

    // Session errors
    #[error("No such movie: {index} (valid range is 0..{len})")]
    InvalidSelection { index: i64, len: usize },

    // Config errors
    #[error("Invalid config file {path}: {message}")]
    Config { path: PathBuf, message: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Process exit status for a fatal error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::FileOpen { .. } => 2,
            Error::MalformedCount(_)
            | Error::MalformedRecord { .. }
            | Error::UnexpectedEof { .. } => 3,
            Error::CapacityExceeded { .. } => 4,
            Error::Config { .. } => 5,
            Error::InvalidSelection { .. } | Error::Io(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct_for_fatal_errors() {
        let open = Error::FileOpen {
            path: PathBuf::from("missing.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "nope"),
        };
        let capacity = Error::CapacityExceeded {
            requested: 201,
            capacity: 200,
        };
        let malformed = Error::MalformedCount("abc".to_string());

        assert_eq!(open.exit_code(), 2);
        assert_eq!(malformed.exit_code(), 3);
        assert_eq!(capacity.exit_code(), 4);
        assert_ne!(open.exit_code(), 0);
    }

    #[test]
    fn test_file_open_message_names_file() {
        let err = Error::FileOpen {
            path: PathBuf::from("movies.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "nope"),
        };
        assert!(err.to_string().contains("movies.txt"));
    }
}
