//! Platform paths and default file creation.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use orbfield_core::ConfigError;
use tracing::debug;

use crate::template::default_config_toml;

fn project_dirs() -> Result<ProjectDirs, ConfigError> {
    ProjectDirs::from("", "", "orbfield").ok_or(ConfigError::NoConfigDir)
}

/// Platform-specific config file path.
///
/// On Linux: `~/.config/orbfield/config.toml`
/// On macOS: `~/Library/Application Support/orbfield/config.toml`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    Ok(project_dirs()?.config_dir().join("config.toml"))
}

/// Where the log file goes; the terminal itself belongs to the UI.
pub fn default_log_path() -> Result<PathBuf, ConfigError> {
    Ok(project_dirs()?.data_local_dir().join("orbfield.log"))
}

/// Write the commented default config to `path`, creating parent dirs.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    std::fs::write(path, default_config_toml()).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("wrote default config template to {}", path.display());
    Ok(())
}
