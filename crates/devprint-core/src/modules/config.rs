//! Configuration file loading.

use std::fs;
use std::path::{Path, PathBuf};

use devprint_types::{ConfigError, FingerprintConfig};
use tracing::{info, warn};

use crate::utils::paths::get_data_dir;

const CONFIG_FILE: &str = "devprint_config.json";

/// Path of the config file inside the data directory.
pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    Ok(get_data_dir()?.join(CONFIG_FILE))
}

/// Load the configuration from the data directory.
///
/// A missing file yields the defaults.
pub fn load_config() -> Result<FingerprintConfig, ConfigError> {
    load_config_from(&get_config_path()?)
}

/// Load the configuration from an explicit path.
pub fn load_config_from(path: &Path) -> Result<FingerprintConfig, ConfigError> {
    if !path.exists() {
        info!(path = %path.display(), "Config file not found, using defaults");
        return Ok(FingerprintConfig::new());
    }

    let content = fs::read_to_string(path).map_err(|e| ConfigError::ParseError {
        message: format!("failed to read {}: {}", path.display(), e),
    })?;

    serde_json::from_str(&content).map_err(|e| {
        warn!(path = %path.display(), error = %e, "Config file is not valid JSON");
        ConfigError::from_json_error(&e)
    })
}

/// Save the configuration to the data directory.
pub fn save_config(config: &FingerprintConfig) -> Result<(), ConfigError> {
    save_config_to(&get_config_path()?, config)
}

/// Save the configuration to an explicit path, via a temp file and rename.
pub fn save_config_to(path: &Path, config: &FingerprintConfig) -> Result<(), ConfigError> {
    let content =
        serde_json::to_string_pretty(config).map_err(|e| ConfigError::from_json_error(&e))?;

    let temp_path = path.with_extension("json.tmp");
    if let Err(e) = fs::write(&temp_path, content) {
        let _ = fs::remove_file(&temp_path);
        return Err(ConfigError::from_io_error(&e));
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        ConfigError::from_io_error(&e)
    })
}
