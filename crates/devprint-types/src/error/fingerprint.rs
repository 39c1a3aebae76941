//! Fingerprint policy errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by explicit fingerprint operations.
///
/// The derivation path never produces `InvalidPreset`; unknown names are
/// replaced by the default preset there and only logged.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum FingerprintError {
    /// Preset name is not part of the catalogue
    #[error("Invalid preset: {preset}")]
    InvalidPreset {
        /// The rejected preset name, verbatim
        preset: String,
    },

    /// Neither the requested nor the default preset resolved to a template
    #[error("No device template available for preset {preset}")]
    TemplateUnavailable {
        /// Preset that was requested from the generator
        preset: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let invalid = FingerprintError::InvalidPreset { preset: "Nokia".to_string() };
        let missing =
            FingerprintError::TemplateUnavailable { preset: "TelegramAndroid".to_string() };

        assert_eq!(invalid.to_string(), "Invalid preset: Nokia");
        assert_eq!(missing.to_string(), "No device template available for preset TelegramAndroid");
    }
}
