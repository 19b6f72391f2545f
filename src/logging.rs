//! Structured logging for the binary. Events go to a plain-text file beside
//! the database because the terminal is taken over by the UI.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Log file name inside the log directory.
pub const LOG_FILE_NAME: &str = "billing-app.log";

/// Install a file-backed `tracing` subscriber. The terminal belongs to the
/// UI, so nothing is written to stdout or stderr. `RUST_LOG` overrides the
/// default `info` level.
pub fn init(log_dir: &Path) -> Result<()> {
    fs::create_dir_all(log_dir).context("failed to create log directory")?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join(LOG_FILE_NAME))
        .context("failed to open log file")?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!("failed to install log subscriber: {err}"))
}
