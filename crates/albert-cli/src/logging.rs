// Rust guideline compliant 2026-10-17

//! Tracing setup for the CLI.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;

/// Log verbosity accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogLevel {
    /// Errors only.
    Error,
    /// Errors and warnings.
    Warn,
    /// Progress messages (default).
    #[default]
    Info,
    /// Request-level details.
    Debug,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
        }
    }
}

/// Logging options for one process run.
#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    /// Maximum level emitted.
    pub level: LogLevel,
    /// Optional file receiving JSON log lines instead of stderr.
    pub file: Option<PathBuf>,
}

/// Installs the global tracing subscriber.
///
/// With a log file, JSON lines are appended through a non-blocking writer and
/// the returned guard must be kept alive until exit so buffered lines are
/// flushed. Without one, human-readable lines go to stderr.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init_tracing(options: &LogOptions) -> Result<Option<WorkerGuard>> {
    let level = Level::from(options.level);

    if let Some(path) = &options.file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening log file {}", path.display()))?;
        let (writer, guard) = tracing_appender::non_blocking(file);
        let subscriber = fmt()
            .with_max_level(level)
            .with_target(false)
            .json()
            .with_writer(writer)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
        return Ok(Some(guard));
    }

    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(None)
}
