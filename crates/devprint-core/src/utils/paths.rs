use std::fs;
use std::path::PathBuf;

use devprint_types::ConfigError;

const DATA_DIR: &str = ".devprint";

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "DEVPRINT_DATA_DIR";

/// Get data directory path.
///
/// Priority:
/// 1. `DEVPRINT_DATA_DIR` environment variable (for container deployments)
/// 2. `~/.devprint` (default for desktop usage)
pub fn get_data_dir() -> Result<PathBuf, ConfigError> {
    let data_dir = if let Ok(custom_dir) = std::env::var(DATA_DIR_ENV) {
        PathBuf::from(custom_dir)
    } else {
        let home = dirs::home_dir().ok_or_else(|| ConfigError::DataDirUnavailable {
            message: "failed to resolve home directory".to_string(),
        })?;
        home.join(DATA_DIR)
    };

    if !data_dir.exists() {
        fs::create_dir_all(&data_dir).map_err(|e| ConfigError::DataDirUnavailable {
            message: format!("failed to create {}: {}", data_dir.display(), e),
        })?;
    }

    Ok(data_dir)
}
