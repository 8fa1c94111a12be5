//! Configuration loading and data folder resolution

use crate::{Error, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Environment variable naming the data folder
pub const DATA_FOLDER_ENV: &str = "MIP_DATA_FOLDER";

/// Environment variable naming the listen port
pub const PORT_ENV: &str = "MIP_PORT";

/// Default listen port for the dashboard module
pub const DEFAULT_PORT: u16 = 5780;

/// Optional TOML configuration file contents
///
/// Read from `~/.config/mip/config.toml` (or the platform equivalent).
/// Every field is optional; missing files or fields fall through to the
/// compiled defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub data_folder: Option<String>,
    pub port: Option<u16>,
    pub log_level: Option<String>,
}

impl TomlConfig {
    /// Load the config file if one exists, otherwise return defaults
    pub fn load() -> Self {
        match config_file_path() {
            Ok(path) => match std::fs::read_to_string(&path) {
                Ok(content) => toml::from_str(&content).unwrap_or_default(),
                Err(_) => TomlConfig::default(),
            },
            Err(_) => TomlConfig::default(),
        }
    }
}

/// Data folder resolution priority order:
/// 1. Command-line argument (highest priority)
/// 2. Environment variable (MIP_DATA_FOLDER)
/// 3. TOML config file
/// 4. Compiled default (`./data`, relative to the working directory)
pub fn resolve_data_folder(cli_arg: Option<&str>, toml_config: &TomlConfig) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return PathBuf::from(path);
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(DATA_FOLDER_ENV) {
        if !path.trim().is_empty() {
            return PathBuf::from(path);
        }
    }

    // Priority 3: TOML config file
    if let Some(path) = &toml_config.data_folder {
        return PathBuf::from(path);
    }

    // Priority 4: Compiled default
    PathBuf::from("data")
}

/// Listen port resolution following the same priority order as the data folder
pub fn resolve_port(cli_arg: Option<u16>, toml_config: &TomlConfig) -> u16 {
    if let Some(port) = cli_arg {
        return port;
    }

    if let Ok(port) = std::env::var(PORT_ENV) {
        if let Ok(port) = port.parse::<u16>() {
            return port;
        }
    }

    if let Some(port) = toml_config.port {
        return port;
    }

    DEFAULT_PORT
}

/// Get the configuration file path for the platform
///
/// Checks the user config directory first, then `/etc/mip/config.toml` on
/// Linux.
fn config_file_path() -> Result<PathBuf> {
    if let Some(path) = dirs::config_dir().map(|d| d.join("mip").join("config.toml")) {
        if path.exists() {
            return Ok(path);
        }
    }

    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc/mip/config.toml");
        if system_config.exists() {
            return Ok(system_config);
        }
    }

    Err(Error::Config("No config file found".to_string()))
}
