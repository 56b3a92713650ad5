//! Platform locations for the config and log files.

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::ConfigError;

const CONFIG_FILE: &str = "config.toml";
const LOG_FILE: &str = "backdrop.log";

fn project_dirs() -> Result<ProjectDirs, ConfigError> {
    ProjectDirs::from("", "", "backdrop").ok_or(ConfigError::NoHomeDir)
}

/// Path of the config file, e.g. `~/.config/backdrop/config.toml`.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(project_dirs()?.config_dir().join(CONFIG_FILE))
}

/// Path of the log file, e.g. `~/.local/share/backdrop/backdrop.log`.
pub fn log_path() -> Result<PathBuf, ConfigError> {
    Ok(project_dirs()?.data_local_dir().join(LOG_FILE))
}
