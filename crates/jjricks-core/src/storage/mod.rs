mod config;

pub use config::{ColorConfig, Config, LoggingConfig, TimerConfig};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns the configuration directory, creating it if needed.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = config_dir();
    std::fs::create_dir_all(&dir).map_err(|source| ConfigError::DirectoryFailed {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}

/// Where the configuration lives; nothing is created.
///
/// `JJRICKS_CONFIG_DIR` wins when set. Otherwise `~/.config/jjricks/`, or
/// `~/.config/jjricks-dev/` when `JJRICKS_ENV=dev`.
pub fn config_dir() -> PathBuf {
    match std::env::var_os("JJRICKS_CONFIG_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("JJRICKS_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("jjricks-dev")
            } else {
                base_dir.join("jjricks")
            }
        }
    }
}
