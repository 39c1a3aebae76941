//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Runtime configuration for the fingerprint engine and its storage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FingerprintConfig {
    /// Language used when an account has no `lang_code`
    pub default_lang_code: String,
    /// Language used when an account has no `system_lang_code`
    pub default_system_lang_code: String,
    /// Tracing filter applied when `RUST_LOG` is unset
    pub log_level: String,
    /// SQLite file name inside the data directory
    pub database_file: String,
}

impl FingerprintConfig {
    /// Create default configuration.
    pub fn new() -> Self {
        Self {
            default_lang_code: "en".to_string(),
            default_system_lang_code: "en".to_string(),
            log_level: "info".to_string(),
            database_file: "accounts.db".to_string(),
        }
    }
}

impl Default for FingerprintConfig {
    fn default() -> Self {
        Self::new()
    }
}
