//! omdb-search CLI
//!
//! Command-line interface for searching the OMDb API

use clap::Parser;
use omdb_search::cli::{Cli, Runner};
use omdb_search::logging;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let log_state = logging::init(cli.log_format, level);
    if !log_state.installed {
        eprintln!("warning: a tracing subscriber was already installed; --log-format ignored");
    }

    let runner = Runner::new(cli);

    if let Err(e) = runner.run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
