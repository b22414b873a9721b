// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Logging setup.
//!
//! Format: timestamp file:line LEVEL message, written to the log file.
//!
//! Respects `RUST_LOG` if set, otherwise uses the level chosen by the
//! quiet/verbose flags. Respects `RUST_LOG_FORMAT=json` for JSON lines.
//! When the log file cannot be opened, logs go to stderr instead.

use crate::constants::{DEFAULT_LOG_FILE, LOG_FORMAT_ENV};
use std::path::Path;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// Level derived from the quiet/verbose flags.
#[must_use]
pub fn level_from_flags(quiet: bool, verbose: bool) -> Level {
    if quiet {
        Level::WARN
    } else if verbose {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

/// Build an appender writing to exactly `path`, appending to an existing file.
///
/// # Errors
///
/// Returns the appender's initialization error (missing directory, no permission).
pub fn file_appender(
    path: &Path,
) -> Result<RollingFileAppender, tracing_appender::rolling::InitError> {
    let directory = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .map_or_else(|| DEFAULT_LOG_FILE.into(), |n| n.to_string_lossy());

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.as_ref())
        .build(directory)
}

/// Install the global subscriber.
///
/// The returned guard flushes buffered log lines when dropped and must be
/// held until the process exits.
pub fn init_logging(level: Level, logfile: Option<&Path>) -> WorkerGuard {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));

    let (writer, guard, to_file) = match logfile.map(file_appender) {
        Some(Ok(appender)) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (writer, guard, true)
        }
        Some(Err(e)) => {
            eprintln!("Error: cannot open log file, logging to stderr: {e}");
            let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());
            (writer, guard, false)
        }
        None => {
            let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());
            (writer, guard, false)
        }
    };

    let log_format = std::env::var(LOG_FORMAT_ENV).unwrap_or_else(|_| "text".to_string());

    match log_format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(writer)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .json()
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(writer)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .with_ansi(!to_file)
                .compact()
                .init();
        }
    }

    guard
}
