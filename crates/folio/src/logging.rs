//! Log file setup.
//!
//! The terminal belongs to the UI, so logs go to a file:
//! `<data dir>/folio.log` unless `--log-file` says otherwise. `RUST_LOG`
//! controls the filter and defaults to `info`.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use color_eyre::eyre::{Result, WrapErr, eyre};
use directories::ProjectDirs;
use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = "folio.log";

/// Default log file location, if the platform has a data directory.
pub fn default_log_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "folio").map(|dirs| dirs.data_local_dir().join(LOG_FILE_NAME))
}

/// Install the global subscriber. Returns the log file path, or `None` if no
/// location could be determined (logging is then disabled).
pub fn init(log_file: Option<PathBuf>) -> Result<Option<PathBuf>> {
    let Some(path) = log_file.or_else(default_log_path) else {
        return Ok(None);
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|err| eyre!(err))?;

    Ok(Some(path))
}
