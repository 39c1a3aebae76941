//! Fingerprint value types.

use serde::{Deserialize, Serialize};

/// Application credential pair issued with an official client build.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ApiCredentials {
    pub api_id: Option<i64>,
    pub api_hash: Option<String>,
}

/// A complete client identity, either freshly generated or mirrored from an account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiData {
    /// Application id (absent for presets without official credentials)
    pub api_id: Option<i64>,
    /// Application secret paired with `api_id`
    pub api_hash: Option<String>,
    /// Presented device model, e.g. a phone or desktop name
    pub device_model: String,
    /// Presented OS version string
    pub system_version: String,
    /// Presented client build version
    pub app_version: String,
    /// Client UI language
    pub lang_code: String,
    /// Operating system language
    pub system_lang_code: String,
}

impl ApiData {
    /// Credential half of the fingerprint.
    pub fn credentials(&self) -> ApiCredentials {
        ApiCredentials { api_id: self.api_id, api_hash: self.api_hash.clone() }
    }
}

/// Result of inspecting an account's stored fingerprint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct FingerprintValidation {
    pub has_device_model: bool,
    pub has_system_version: bool,
    pub has_app_version: bool,
    pub has_lang_code: bool,
    /// Stored preset is in the catalogue. Does not affect `is_complete`.
    pub has_valid_preset: bool,
    pub is_complete: bool,
}
