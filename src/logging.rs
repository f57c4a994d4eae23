//! Tracing subscriber setup.
//!
//! The terminal belongs to the TUI, so log output always goes to a file.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{AppConfig, DEFAULT_LOG_LEVEL};

/// Install the global subscriber described by the `[log]` config section.
///
/// Returns the log file path when logging is active. Setup failures are
/// reported on stderr and leave logging disabled.
pub fn init(config: &AppConfig) -> Option<PathBuf> {
    if !config.log_enabled() {
        return None;
    }
    let path = config.log_file()?;
    let file = match open_log_file(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: cannot open log file {}: {}", path.display(), e);
            return None;
        }
    };
    build_subscriber(file, config.log_level()).try_init().ok()?;
    Some(path)
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    File::create(path)
}

/// Build a file-backed subscriber filtered by `level` (an `EnvFilter`
/// directive string). Invalid directives fall back to the default level.
pub fn build_subscriber(log_file: File, level: &str) -> impl tracing::Subscriber + Send + Sync {
    let env_filter =
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let fmt_layer = fmt::layer()
        .with_writer(Arc::new(log_file))
        .with_ansi(false);

    tracing_subscriber::registry().with(fmt_layer).with(env_filter)
}
