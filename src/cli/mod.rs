//! Command line interface: arguments, prompt parsing and the interactive session.

pub mod args;
pub mod command;
pub mod session;
