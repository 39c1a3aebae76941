//! Deterministic generator used by the engine's tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use devprint_types::{ApiCredentials, ApiData, ApiPreset};
use sha2::{Digest, Sha256};

use crate::modules::generator::{DeviceTemplate, FingerprintGenerator};

pub(crate) struct HashTemplate {
    preset: ApiPreset,
    api_id: i64,
    calls: AtomicUsize,
}

impl HashTemplate {
    fn new(preset: ApiPreset, api_id: i64) -> Self {
        Self { preset, api_id, calls: AtomicUsize::new(0) }
    }
}

impl DeviceTemplate for HashTemplate {
    fn credentials(&self) -> ApiCredentials {
        ApiCredentials {
            api_id: Some(self.api_id),
            api_hash: Some(format!("hash-{}", self.preset.as_str().to_lowercase())),
        }
    }

    fn generate(&self, seed: &str) -> ApiData {
        let _ = self.calls.fetch_add(1, Ordering::SeqCst);
        let digest = Sha256::digest(format!("{}|{}", self.preset, seed).as_bytes());
        let credentials = self.credentials();

        ApiData {
            api_id: credentials.api_id,
            api_hash: credentials.api_hash,
            device_model: format!(
                "{}-{:02x}{:02x}{:02x}",
                self.preset, digest[0], digest[1], digest[2]
            ),
            system_version: format!("os {}.{}", digest[3] % 8 + 10, digest[4] % 10),
            app_version: format!("{}.{}.{}", digest[5] % 5 + 8, digest[6] % 20, digest[7] % 10),
            lang_code: "en".to_string(),
            system_lang_code: "en-US".to_string(),
        }
    }
}

/// Generator with a template per listed preset.
pub(crate) struct FixtureGenerator {
    templates: HashMap<ApiPreset, HashTemplate>,
}

impl FixtureGenerator {
    pub(crate) fn full() -> Self {
        Self::only(&ApiPreset::ALL)
    }

    pub(crate) fn only(presets: &[ApiPreset]) -> Self {
        let templates = presets
            .iter()
            .enumerate()
            .map(|(i, p)| (*p, HashTemplate::new(*p, 1000 + i as i64)))
            .collect();
        Self { templates }
    }

    /// Total `generate` calls across all templates.
    pub(crate) fn generate_calls(&self) -> usize {
        self.templates.values().map(|t| t.calls.load(Ordering::SeqCst)).sum()
    }
}

impl FingerprintGenerator for FixtureGenerator {
    fn resolve(&self, preset: ApiPreset) -> Option<&dyn DeviceTemplate> {
        self.templates.get(&preset).map(|t| t as &dyn DeviceTemplate)
    }
}
