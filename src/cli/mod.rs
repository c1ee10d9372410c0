//! CLI module
//!
//! Command-line interface over the search client.
//!
//! # Commands
//!
//! - `search` - Search titles, all pages or one page
//! - `id` - Look up a title by IMDb id
//! - `title` - Look up a title by exact name

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
