//! CLI subcommand implementations.

pub mod categories;
pub mod check;
pub mod init;
pub mod output;
