//! Shared fixtures for integration tests.

use std::collections::HashMap;

use devprint_core::{ApiCredentials, ApiData, ApiPreset, DeviceTemplate, FingerprintGenerator};
use sha2::{Digest, Sha256};

pub struct SeededTemplate {
    preset: ApiPreset,
}

impl DeviceTemplate for SeededTemplate {
    fn credentials(&self) -> ApiCredentials {
        ApiCredentials { api_id: Some(4), api_hash: Some(format!("{}-hash", self.preset)) }
    }

    fn generate(&self, seed: &str) -> ApiData {
        let digest = Sha256::digest(format!("{}:{}", self.preset, seed).as_bytes());
        let hex: String = digest.iter().take(4).map(|b| format!("{b:02x}")).collect();
        let credentials = self.credentials();

        ApiData {
            api_id: credentials.api_id,
            api_hash: credentials.api_hash,
            device_model: format!("{} device {}", self.preset, hex),
            system_version: format!("build {}", digest[4]),
            app_version: format!("1.{}", digest[5]),
            lang_code: "en".to_string(),
            system_lang_code: "en".to_string(),
        }
    }
}

pub struct SeededGenerator {
    templates: HashMap<ApiPreset, SeededTemplate>,
}

impl SeededGenerator {
    pub fn new() -> Self {
        let templates =
            ApiPreset::ALL.into_iter().map(|preset| (preset, SeededTemplate { preset })).collect();
        Self { templates }
    }
}

impl FingerprintGenerator for SeededGenerator {
    fn resolve(&self, preset: ApiPreset) -> Option<&dyn DeviceTemplate> {
        self.templates.get(&preset).map(|t| t as &dyn DeviceTemplate)
    }
}
