use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(author, version, about)]
#[must_use]
pub struct Args {
    /// Directory the daily log file is written into.
    #[clap(long, env = "JOULE_LOG_DIR", default_value = ".")]
    pub log_dir: PathBuf,
}
