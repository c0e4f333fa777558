//! Diagnostics output for the `pascal-lattice` binary
//!
//! Build, evaluation and layout stages report through `tracing`; this module
//! installs the subscriber that prints them as `[LEVEL] message` lines on
//! stderr, leaving stdout for the rendered lattice or its JSON projection.
//! The library never calls into here.
//!
//! # Usage
//!
//! ```rust
//! use pascal_lattice::util::logger::{self, LogLevel};
//!
//! logger::init_with_level(LogLevel::Debug);
//! tracing::debug!("lattice built: {} nodes", 6);
//! ```

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry};

/// Verbosity of the stage reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Per-row construction, memo resets, evaluation counters
    Debug,
    /// One summary line per generate action
    Info,
    /// Only unexpected conditions such as unplaced children
    Warn,
    Error,
}

impl LogLevel {
    /// Level used by the CLI: everything with `--verbose`, warnings otherwise.
    #[inline]
    pub fn for_cli(verbose: bool) -> Self {
        if verbose {
            LogLevel::Debug
        } else {
            LogLevel::Warn
        }
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// Install the stderr subscriber at INFO
pub fn init() {
    init_with_level(LogLevel::Info);
}

/// Install the stderr subscriber at `level`.
///
/// Only the first call in a process takes effect; later calls return
/// without touching the installed subscriber.
pub fn init_with_level(level: LogLevel) {
    let filter = tracing_subscriber::filter::LevelFilter::from_level(level.into());

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_ansi(false)
        .compact()
        .with_filter(filter);

    let _ = Registry::default().with(layer).try_init();
}

/// Install the subscriber for the binary's `--verbose` flag
pub fn init_cli(verbose: bool) {
    init_with_level(LogLevel::for_cli(verbose));
}
