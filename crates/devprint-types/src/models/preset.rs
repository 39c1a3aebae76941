//! Device preset catalogue.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FingerprintError;

/// Named client archetype a fingerprint is generated from.
///
/// The catalogue is closed and ordered; `TelegramAndroid` is the designated
/// default used whenever a requested preset is missing or unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApiPreset {
    #[serde(rename = "TelegramAndroid")]
    TelegramAndroid,
    #[serde(rename = "TelegramIOS")]
    TelegramIos,
    #[serde(rename = "TelegramDesktop")]
    TelegramDesktop,
    #[serde(rename = "TelegramMacOS")]
    TelegramMacos,
    #[serde(rename = "TelegramAndroidX")]
    TelegramAndroidX,
    #[serde(rename = "TelegramAndroidBeta")]
    TelegramAndroidBeta,
    #[serde(rename = "TelegramWeb_Z")]
    TelegramWebZ,
    #[serde(rename = "TelegramWeb_K")]
    TelegramWebK,
    #[serde(rename = "Webogram")]
    Webogram,
}

impl ApiPreset {
    /// Every preset, in catalogue order.
    pub const ALL: [Self; 9] = [
        Self::TelegramAndroid,
        Self::TelegramIos,
        Self::TelegramDesktop,
        Self::TelegramMacos,
        Self::TelegramAndroidX,
        Self::TelegramAndroidBeta,
        Self::TelegramWebZ,
        Self::TelegramWebK,
        Self::Webogram,
    ];

    /// Fallback preset for missing or invalid names.
    pub const DEFAULT: Self = Self::TelegramAndroid;

    /// Catalogue name as stored on accounts.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TelegramAndroid => "TelegramAndroid",
            Self::TelegramIos => "TelegramIOS",
            Self::TelegramDesktop => "TelegramDesktop",
            Self::TelegramMacos => "TelegramMacOS",
            Self::TelegramAndroidX => "TelegramAndroidX",
            Self::TelegramAndroidBeta => "TelegramAndroidBeta",
            Self::TelegramWebZ => "TelegramWeb_Z",
            Self::TelegramWebK => "TelegramWeb_K",
            Self::Webogram => "Webogram",
        }
    }

    /// Catalogue names, in order.
    pub fn list_presets() -> Vec<&'static str> {
        Self::ALL.iter().map(Self::as_str).collect()
    }

    /// Membership test against the catalogue.
    pub fn is_known(name: &str) -> bool {
        Self::ALL.iter().any(|p| p.as_str() == name)
    }
}

impl Default for ApiPreset {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for ApiPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiPreset {
    type Err = FingerprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| FingerprintError::InvalidPreset { preset: s.to_string() })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_order_and_default() {
        let names = ApiPreset::list_presets();
        assert_eq!(names.len(), 9);
        assert_eq!(names[0], "TelegramAndroid");
        assert_eq!(names[8], "Webogram");
        assert_eq!(ApiPreset::default().as_str(), "TelegramAndroid");
    }

    #[test]
    fn test_from_str_is_exact() {
        assert_eq!("TelegramWeb_K".parse::<ApiPreset>().unwrap(), ApiPreset::TelegramWebK);
        assert!("telegramandroid".parse::<ApiPreset>().is_err());
        assert!(!ApiPreset::is_known("Bogus"));
        assert!(ApiPreset::is_known("TelegramIOS"));
    }

    #[test]
    fn test_serde_uses_catalogue_names() {
        for preset in ApiPreset::ALL {
            let json = serde_json::to_string(&preset).unwrap();
            assert_eq!(json, format!("\"{}\"", preset));
            let parsed: ApiPreset = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, preset);
        }
    }
}
