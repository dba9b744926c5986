use std::{fs::OpenOptions, path::Path, sync::Mutex};

use chrono::Local;

use crate::prelude::*;

/// Point the global `tracing` subscriber at the daily log file.
///
/// The file is opened once at startup and appended to, one line per event
/// with a timestamp, the severity level, and the message.
pub fn init(log_directory: &Path) -> Result {
    let path = log_directory.join(format!("joule_{}.log", Local::now().format("%Y%m%d")));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open the log file at `{}`", path.display()))?;
    tracing_subscriber::fmt().with_ansi(false).with_writer(Mutex::new(file)).init();
    Ok(())
}
