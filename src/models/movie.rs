//! Movie record and the in-memory collection.

use crate::{Error, Result};

/// Default maximum number of movies a collection holds.
pub const DEFAULT_CAPACITY: usize = 200;

/// A single movie entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    /// Title, with spaces restored.
    pub title: String,
    /// Director, with spaces restored.
    pub director: String,
    /// Runtime in minutes.
    pub runtime: u32,
    /// Number of times watched.
    pub watch_count: u32,
    /// Release year.
    pub year: i32,
}

impl Movie {
    /// Build a movie from raw file tokens, turning `_` placeholders into spaces.
    pub fn from_raw(title: &str, director: &str, runtime: u32, watch_count: u32, year: i32) -> Self {
        Self {
            title: title.replace('_', " "),
            director: director.replace('_', " "),
            runtime,
            watch_count,
            year,
        }
    }
}

/// Ordered set of movies loaded for one session.
///
/// Order is the file order and never changes; it is also the display and
/// selection order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    movies: Vec<Movie>,
    capacity: usize,
}

impl Default for Collection {
    fn default() -> Self {
        Self::new()
    }
}

impl Collection {
    /// Create an empty collection with the default capacity limit.
    pub fn new() -> Self {
        Self::with_capacity_limit(DEFAULT_CAPACITY)
    }

    /// Create an empty collection holding at most `capacity` movies.
    pub fn with_capacity_limit(capacity: usize) -> Self {
        Self {
            movies: Vec::new(),
            capacity,
        }
    }

    pub fn capacity_limit(&self) -> usize {
        self.capacity
    }

    /// Append a movie, keeping insertion order.
    pub fn push(&mut self, movie: Movie) -> Result<()> {
        if self.movies.len() >= self.capacity {
            return Err(Error::CapacityExceeded {
                requested: self.movies.len() + 1,
                capacity: self.capacity,
            });
        }
        self.movies.push(movie);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Movie> {
        self.movies.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Movie> {
        self.movies.iter()
    }

    /// Mark the movie at `index` as watched once more.
    ///
    /// Out-of-range indices (negative included) leave the collection untouched.
    pub fn watch(&mut self, index: i64) -> Result<&Movie> {
        let len = self.movies.len();
        let movie = usize::try_from(index)
            .ok()
            .and_then(|i| self.movies.get_mut(i))
            .ok_or(Error::InvalidSelection { index, len })?;

        movie.watch_count = movie.watch_count.saturating_add(1);
        tracing::debug!("Watched {:?}: count now {}", movie.title, movie.watch_count);
        Ok(movie)
    }

    /// Sum of all runtimes in minutes.
    pub fn total_runtime(&self) -> u64 {
        self.movies.iter().map(|m| u64::from(m.runtime)).sum()
    }

    /// Sum of all watch counts.
    pub fn total_watch_count(&self) -> u64 {
        self.movies.iter().map(|m| u64::from(m.watch_count)).sum()
    }

    /// Movie with the lowest watch count; the lowest index wins ties.
    pub fn least_watched(&self) -> Option<(usize, &Movie)> {
        self.movies
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, &Movie)>, (i, movie)| match best {
                Some((_, b)) if b.watch_count <= movie.watch_count => best,
                _ => Some((i, movie)),
            })
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Movie;
    type IntoIter = std::slice::Iter<'a, Movie>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
