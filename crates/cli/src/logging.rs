// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-run logging: a console layer driven by `-v` and a debug log file.
//!
//! The subscriber is installed for the current thread only and removed when
//! the returned [`LogGuard`] is dropped.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::level_filters::LevelFilter;
use tracing::subscriber::DefaultGuard;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Keeps the run's subscriber installed and its log file flushed.
pub struct LogGuard {
    _default: DefaultGuard,
    _file: Option<WorkerGuard>,
    log_path: Option<PathBuf>,
}

impl LogGuard {
    /// Log file written by this run, if one could be created.
    pub fn log_path(&self) -> Option<&PathBuf> {
        self.log_path.as_ref()
    }
}

/// Map the `-v` count to a console level: 0=error, 1=warn, 2=info, 3+=debug.
pub fn console_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::ERROR,
        1 => LevelFilter::WARN,
        2 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    }
}

/// Install the subscriber for this run. `RUST_LOG` overrides the console level.
pub fn init(verbosity: u8) -> LogGuard {
    let console_filter = EnvFilter::builder()
        .with_default_directive(console_level(verbosity).into())
        .from_env_lossy();
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .with_filter(console_filter);

    let (file_layer, file_guard, log_path) = match open_run_log() {
        Some((appender, path)) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(LevelFilter::DEBUG);
            (Some(layer), Some(guard), Some(path))
        }
        None => (None, None, None),
    };

    let subscriber = tracing_subscriber::registry().with(console).with(file_layer);
    let default = tracing::subscriber::set_default(subscriber);

    if let Some(path) = &log_path {
        tracing::debug!(path = %path.display(), "logging to file");
    }

    LogGuard {
        _default: default,
        _file: file_guard,
        log_path,
    }
}

/// Create `dscmd-<unix-seconds>-<pid>.log` in the state directory.
fn open_run_log() -> Option<(RollingFileAppender, PathBuf)> {
    let dir = crate::env::state_dir()?;
    std::fs::create_dir_all(&dir).ok()?;

    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let prefix = format!("dscmd-{}-{}", secs, std::process::id());

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(&prefix)
        .filename_suffix("log")
        .build(&dir)
        .ok()?;
    Some((appender, dir.join(format!("{}.log", prefix))))
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
