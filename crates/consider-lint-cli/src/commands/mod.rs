//! Subcommand implementations.

pub mod check;
pub mod init;
pub mod list_phrases;
pub mod output;
