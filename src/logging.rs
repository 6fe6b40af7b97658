//! Logger setup
//!
//! Logging goes through the `log` facade; the binary installs `env_logger`
//! here. `RUST_LOG` takes precedence over the `-v` count.

use anyhow::{Context, Result};
use env_logger::{Builder, Target};
use log::LevelFilter;
use std::fs::File;
use std::path::Path;

/// Where log records are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
    /// Discard everything, e.g. while the TUI owns the terminal
    Off,
}

/// Level selected by the number of `-v` flags
#[must_use]
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger
///
/// # Errors
///
/// Returns an error if the log file cannot be created or a logger is already
/// installed.
pub fn init(verbosity: u8, target: LogTarget<'_>) -> Result<()> {
    let mut builder = Builder::new();
    builder.filter_level(level_for(verbosity)).format_timestamp_millis();

    match target {
        LogTarget::Stderr => {
            builder.parse_default_env().target(Target::Stderr);
        }
        LogTarget::File(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            builder
                .parse_default_env()
                .write_style(env_logger::WriteStyle::Never)
                .target(Target::Pipe(Box::new(file)));
        }
        LogTarget::Off => {
            builder.filter_level(LevelFilter::Off);
        }
    }

    builder.try_init().context("failed to install logger")
}
