//! Movie Tracker Library
//!
//! Loads a movie list file, renders it as a table, tracks watch counts and
//! summarises the collection.

pub mod cli;
pub mod core;
pub mod error;
pub mod models;

pub use error::{Error, Result};
pub use models::movie::{Collection, Movie};
