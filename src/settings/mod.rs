//! Settings file parsing and the command-line surface. Every command takes
//! its target (table, column, email, file) as an explicit argument; only
//! connection endpoints and hasher costs live in the settings file.

mod cli;
pub use clap::{Parser, Subcommand};
pub use cli::*;

mod settings;
pub use settings::*;
