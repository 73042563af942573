//! File logging.
//!
//! The TUI owns stdout, so tracing output goes to a file (by default under
//! the user cache directory). Filter directives come from
//! [`AppConfig::log_filter`](crate::config::AppConfig).

use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use color_eyre::{eyre::WrapErr, Result};
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

const FALLBACK_FILTER: &str = "info";

/// Install the global subscriber described by `config`.
///
/// Does nothing when `config.log_file` is `None`.
pub fn init_logging(config: &AppConfig) -> Result<()> {
    let Some(path) = config.log_file.as_deref() else {
        return Ok(());
    };

    let file = open_log_file(path)?;
    tracing::subscriber::set_global_default(build_subscriber(&config.log_filter, file))
        .wrap_err("Failed to install tracing subscriber")?;

    tracing::info!(path = %path.display(), filter = %config.log_filter, "Logging initialized");
    Ok(())
}

/// Open `path` for appending, creating parent directories.
pub fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("Failed to open log file {}", path.display()))
}

/// Plain-text fmt subscriber writing to `file`.
///
/// Invalid filter directives fall back to `info`.
pub fn build_subscriber(filter: &str, file: File) -> impl Subscriber + Send + Sync {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(FALLBACK_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .finish()
}
