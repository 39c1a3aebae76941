//! Account model and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account record as seen by the fingerprint engine.
///
/// Empty strings are treated the same as absent values everywhere a field is
/// checked for presence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    /// Stable identity key, never changes for the lifetime of the record
    pub phone_number: String,
    /// Preset name; may hold a historical value outside the catalogue
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_preset: Option<String>,
    /// Application id override or the value copied from the last fingerprint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_id: Option<i64>,
    /// Application secret paired with `api_id`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_hash: Option<String>,
    /// Copy credentials from generated fingerprints instead of keeping operator-supplied ones
    #[serde(default = "default_use_official_api")]
    pub use_official_api: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_lang_code: Option<String>,
    /// Generation seed; `phone_number` is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_unique_id: Option<String>,
    /// Set by every successful apply or rotate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint_last_rotated: Option<DateTime<Utc>>,
}

const fn default_use_official_api() -> bool {
    true
}

/// Returns the value when it is set and non-empty.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl Account {
    /// Create a fresh account with every fingerprint field empty.
    pub fn new(phone_number: impl Into<String>) -> Self {
        Self {
            phone_number: phone_number.into(),
            api_preset: None,
            api_id: None,
            api_hash: None,
            use_official_api: true,
            device_model: None,
            system_version: None,
            app_version: None,
            lang_code: None,
            system_lang_code: None,
            device_unique_id: None,
            fingerprint_last_rotated: None,
        }
    }

    /// Builder-style preset assignment.
    pub fn with_preset(mut self, preset: impl Into<String>) -> Self {
        self.api_preset = Some(preset.into());
        self
    }

    /// Seed handed to the generator.
    pub fn seed(&self) -> &str {
        present(&self.device_unique_id).unwrap_or(&self.phone_number)
    }

    /// Stored preset name, if any.
    pub fn preset_name(&self) -> Option<&str> {
        present(&self.api_preset)
    }

    /// Device model, system version and app version are all set.
    pub fn has_complete_triple(&self) -> bool {
        present(&self.device_model).is_some()
            && present(&self.system_version).is_some()
            && present(&self.app_version).is_some()
    }

    pub fn device_model(&self) -> Option<&str> {
        present(&self.device_model)
    }

    pub fn system_version(&self) -> Option<&str> {
        present(&self.system_version)
    }

    pub fn app_version(&self) -> Option<&str> {
        present(&self.app_version)
    }

    pub fn lang_code(&self) -> Option<&str> {
        present(&self.lang_code)
    }

    pub fn system_lang_code(&self) -> Option<&str> {
        present(&self.system_lang_code)
    }
}
