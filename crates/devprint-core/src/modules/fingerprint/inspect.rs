//! Read-only fingerprint inspection.

use devprint_types::{Account, ApiPreset, FingerprintValidation};

use super::FingerprintManager;
use crate::modules::generator::FingerprintGenerator;

/// Sentinel returned by summaries of accounts without a device model.
pub const NO_FINGERPRINT: &str = "No fingerprint configured";

impl<G: FingerprintGenerator> FingerprintManager<G> {
    /// Report which fingerprint fields are present.
    ///
    /// `is_complete` ignores preset validity, so historical preset strings
    /// show up as `has_valid_preset == false` on an otherwise complete account.
    pub fn validate_fingerprint(&self, account: &Account) -> FingerprintValidation {
        let has_device_model = account.device_model().is_some();
        let has_system_version = account.system_version().is_some();
        let has_app_version = account.app_version().is_some();
        let has_lang_code = account.lang_code().is_some();

        FingerprintValidation {
            has_device_model,
            has_system_version,
            has_app_version,
            has_lang_code,
            has_valid_preset: account.preset_name().is_some_and(ApiPreset::is_known),
            is_complete: has_device_model && has_system_version && has_app_version && has_lang_code,
        }
    }

    /// One-line summary, e.g. `Pixel 7 | SDK 34 | 10.2.1 | TelegramAndroid (rotated 2026-01-31)`.
    ///
    /// Stored values are printed verbatim; only unset fields render as `None`.
    pub fn get_fingerprint_summary(&self, account: &Account) -> String {
        let Some(device_model) = account.device_model() else {
            return NO_FINGERPRINT.to_string();
        };

        let last_rotated = account
            .fingerprint_last_rotated
            .map(|t| format!(" (rotated {})", t.format("%Y-%m-%d")))
            .unwrap_or_default();

        format!(
            "{} | {} | {} | {}{}",
            device_model,
            account.system_version.as_deref().unwrap_or("None"),
            account.app_version.as_deref().unwrap_or("None"),
            account.api_preset.as_deref().unwrap_or("None"),
            last_rotated
        )
    }
}
