//! Subcommand implementations.

pub mod extract;
pub mod profile;
pub mod summarize;
