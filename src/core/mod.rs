//! Core business logic modules.

pub mod loader;
pub mod table;
