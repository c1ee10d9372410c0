//! Process-wide logging setup
//!
//! `init` tries to install a `tracing-subscriber` once; later calls return
//! the outcome of that first attempt, so library entry points and tests may
//! call it freely.

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

static INIT: OnceCell<LogState> = OnceCell::new();

/// Output format for log records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per record
    Json,
}

/// Outcome of the first `init` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogState {
    /// Format that was requested first
    pub format: LogFormat,
    /// False when another global subscriber was already in place, in which
    /// case records go to that subscriber and `format` has no effect
    pub installed: bool,
}

/// Install the global subscriber
///
/// `RUST_LOG` wins over `default_level`.
pub fn init(format: LogFormat, default_level: tracing::Level) -> LogState {
    *INIT.get_or_init(|| {
        let filter = EnvFilter::builder()
            .with_default_directive(default_level.into())
            .from_env_lossy();

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr);

        let installed = match format {
            LogFormat::Text => builder.try_init(),
            LogFormat::Json => builder.json().try_init(),
        }
        .is_ok();
        LogState { format, installed }
    })
}

/// Whether `init` installed this crate's subscriber
pub fn is_installed() -> bool {
    INIT.get().is_some_and(|state| state.installed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_reports_existing_subscriber() {
        // Whichever global subscriber lands first wins; ours must notice
        let _ = tracing::subscriber::set_global_default(tracing::subscriber::NoSubscriber::default());

        let first = init(LogFormat::Json, tracing::Level::WARN);
        let second = init(LogFormat::Text, tracing::Level::DEBUG);

        assert!(!first.installed);
        assert!(!is_installed());
        assert_eq!(first, second);
        assert_eq!(second.format, LogFormat::Json);
    }
}
