//! File logging. The terminal belongs to the UI, so log lines go to a file.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use backdrop_config::log_path;
use env_logger::{Builder, Env, Target};

/// Environment variable holding the log filter, e.g. `BACKDROP_LOG=debug`.
const LOG_ENV: &str = "BACKDROP_LOG";

/// Send log output to the platform log file. Returns the file's path.
pub fn init() -> color_eyre::Result<PathBuf> {
    let path = log_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    Builder::from_env(Env::new().filter_or(LOG_ENV, "info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()?;
    Ok(path)
}
