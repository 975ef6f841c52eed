use std::path::{Path, PathBuf};

use crate::constants::APP_DIR_NAME;

fn app_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join(APP_DIR_NAME)
}

/// Returns the platform-specific path for the config file.
///
/// Falls back to the current directory if the platform config directory is
/// unavailable.
pub fn get_config_path() -> String {
    app_config_dir()
        .join("config.toml")
        .to_string_lossy()
        .to_string()
}

/// Returns the platform-specific path for the log directory.
pub fn get_log_dir_path() -> String {
    app_config_dir().join("logs").to_string_lossy().to_string()
}

/// Returns the path of the secret store holding API keys.
pub fn get_secrets_path() -> String {
    app_config_dir()
        .join("secrets.toml")
        .to_string_lossy()
        .to_string()
}
