//! Diagnostic logging via `tracing` and `tracing-subscriber`.
//!
//! Events go to stderr so stdout stays clean for list output and `--json`.
//!
//! # Log Levels
//!
//! - `error`: unrecoverable command failures
//! - `warn`: fail-open persistence (corrupted state, failed saves), shadowed codes
//! - `info`: exports written
//! - `debug`: every committed mutation and load summary
//! - `trace`: everything else

use is_terminal::IsTerminal;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Verbosity;

/// Default level for a configured verbosity plus `-v` flags.
pub fn level_for(verbosity: Verbosity, verbose_flags: u8) -> Level {
    const LEVELS: [Level; 5] = [
        Level::ERROR,
        Level::WARN,
        Level::INFO,
        Level::DEBUG,
        Level::TRACE,
    ];
    let base = match verbosity {
        Verbosity::Quiet => 0,
        Verbosity::Normal => 1,
        Verbosity::Verbose => 2,
        Verbosity::Debug => 3,
    };
    LEVELS[(base + usize::from(verbose_flags)).min(LEVELS.len() - 1)]
}

/// Install the stderr subscriber. `RUST_LOG` wins over `level` when set.
///
/// Calling this twice is harmless; the second call leaves the first
/// subscriber in place.
pub fn init(level: Level) {
    let _ = tracing_subscriber::registry()
        .with(build_env_filter(level))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .without_time(),
        )
        .try_init();
}

fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,paintrack={level}",
            level = level.as_str().to_lowercase()
        ))
    })
}
