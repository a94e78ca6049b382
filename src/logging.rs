//! Logging setup on top of `tracing-subscriber`.
//!
//! Diagnostics always go to stderr so the chart on stdout stays clean.
//! `RUST_LOG`, when set, takes precedence over the configured level.

use std::io;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub use tracing_subscriber::util::TryInitError;

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Most verbose level emitted by this crate.
    pub level: LevelFilter,
    /// Whether to use ANSI colors in output.
    pub with_ansi: bool,
    /// Whether to include the module path in output.
    pub with_target: bool,
    /// Whether to include timestamps in output.
    pub with_timestamps: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::WARN,
            with_ansi: false,
            with_target: false,
            with_timestamps: false,
        }
    }
}

impl LogConfig {
    /// Create a `LogConfig` from the `-v` count, or errors only when quiet.
    ///
    /// - quiet: error
    /// - 0: warn
    /// - 1 (`-v`): info
    /// - 2 (`-vv`): debug, with module targets
    /// - 3+ (`-vvv`): trace, with targets and timestamps
    #[must_use]
    pub fn from_verbosity(verbosity: u8, quiet: bool) -> Self {
        let level = if quiet {
            LevelFilter::ERROR
        } else {
            match verbosity {
                0 => LevelFilter::WARN,
                1 => LevelFilter::INFO,
                2 => LevelFilter::DEBUG,
                _ => LevelFilter::TRACE,
            }
        };
        Self {
            level,
            with_target: level >= LevelFilter::DEBUG,
            with_timestamps: level >= LevelFilter::TRACE,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_ansi(mut self, enable: bool) -> Self {
        self.with_ansi = enable;
        self
    }
}

/// Install the global subscriber. Call once at startup.
pub fn init_logging(config: &LogConfig) -> Result<(), TryInitError> {
    let filter = build_env_filter(config.level);
    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(config.with_ansi)
        .with_target(config.with_target);

    if config.with_timestamps {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.without_time())
            .try_init()
    }
}

/// Build an `EnvFilter` from the given level, respecting `RUST_LOG`.
fn build_env_filter(level: LevelFilter) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // Other crates stay at warn to reduce noise
        EnvFilter::new(format!("warn,covid_chart={level}"))
    })
}
