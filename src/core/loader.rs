//! Movie file loader.
//!
//! File layout: a leading movie count followed by that many records of five
//! whitespace-separated tokens each:
//!
//! ```text
//! 2
//! Inception Chris_Nolan 148 2 2010
//! Moon Duncan_Jones 97 0 2009
//! ```
//!
//! Title and director use `_` in place of spaces. Records do not have to sit
//! on their own line; only the token sequence matters.

use crate::models::movie::{Collection, Movie};
use crate::{Error, Result};
use std::path::Path;
use std::str::{FromStr, SplitWhitespace};

/// Load a movie file into a fresh collection holding at most `capacity` movies.
pub fn load_movies(path: &Path, capacity: usize) -> Result<Collection> {
    let bytes = std::fs::read(path).map_err(|source| Error::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;

    // Titles are opaque tokens; bytes that are not UTF-8 become U+FFFD.
    let content = String::from_utf8_lossy(&bytes);
    let collection = parse_movies(&content, capacity)?;
    tracing::info!("Loaded {} movies from {}", collection.len(), path.display());
    Ok(collection)
}

/// Parse movie file content into a collection.
pub fn parse_movies(content: &str, capacity: usize) -> Result<Collection> {
    let mut tokens = content.split_whitespace();

    let count_token = tokens
        .next()
        .ok_or_else(|| Error::MalformedCount(String::new()))?;
    let count: usize = match count_token.parse() {
        Ok(count) => count,
        // Too large for usize but still a count, so it is over capacity.
        Err(_) if count_token.bytes().all(|b| b.is_ascii_digit()) => usize::MAX,
        Err(_) => return Err(Error::MalformedCount(count_token.to_string())),
    };

    if count > capacity {
        return Err(Error::CapacityExceeded {
            requested: count,
            capacity,
        });
    }

    let mut collection = Collection::with_capacity_limit(capacity);
    let mut reader = RecordReader { tokens, record: 0 };

    for record in 0..count {
        reader.record = record;
        let title = reader.text("title")?;
        let director = reader.text("director")?;
        let runtime = reader.number("runtime")?;
        let watch_count = reader.number("watched")?;
        let year = reader.number("year")?;

        let movie = Movie::from_raw(title, director, runtime, watch_count, year);
        tracing::debug!("Record {}: {:?}", record, movie);
        collection.push(movie)?;
    }

    let trailing = reader.tokens.count();
    if trailing > 0 {
        tracing::debug!("Ignoring {} trailing tokens after {} movies", trailing, count);
    }

    Ok(collection)
}

/// Pulls typed fields for one record out of the token stream.
struct RecordReader<'a> {
    tokens: SplitWhitespace<'a>,
    record: usize,
}

impl<'a> RecordReader<'a> {
    fn text(&mut self, field: &'static str) -> Result<&'a str> {
        self.tokens.next().ok_or(Error::UnexpectedEof {
            record: self.record,
            field,
        })
    }

    fn number<T: FromStr>(&mut self, field: &'static str) -> Result<T> {
        let token = self.text(field)?;
        token.parse().map_err(|_| Error::MalformedRecord {
            record: self.record,
            field,
            value: token.to_string(),
        })
    }
}
