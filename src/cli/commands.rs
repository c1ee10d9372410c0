//! CLI commands and argument parsing

use crate::logging::LogFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// OMDb search client
#[derive(Parser, Debug)]
#[command(name = "omdb-search")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// API key (overrides config file and environment)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Endpoint URL (overrides config file and environment)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Log format
    #[arg(long, global = true, default_value = "text")]
    pub log_format: LogFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search titles; every page unless --page is given
    Search {
        /// Search term
        term: String,

        /// Fetch only this page (1-based)
        #[arg(long)]
        page: Option<u32>,
    },

    /// Look up a title by IMDb id
    Id {
        /// IMDb id, e.g. tt0111161
        id: String,
    },

    /// Look up a title by exact name
    Title {
        /// Title to match
        title: String,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one item per line)
    Json,
    /// Human-readable output
    Pretty,
}
