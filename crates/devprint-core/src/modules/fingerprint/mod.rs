//! Device fingerprint lifecycle.
//!
//! Chooses presets, derives fingerprints from an account's seed, decides when
//! a stored fingerprint is reused, applies and rotates fingerprints, and
//! reports on completeness. The engine holds no per-account state; every
//! operation reads and mutates the `Account` it is handed.
//!
//! Callers serialise access per account. Persistence goes through an injected
//! [`AccountStore`](crate::modules::store::AccountStore); passing `None` skips it.

mod derive;
mod inspect;
mod lifecycle;

#[cfg(test)]
pub(crate) mod fixtures;

pub use inspect::NO_FINGERPRINT;

use devprint_types::{ApiPreset, FingerprintConfig};

use crate::modules::generator::FingerprintGenerator;

/// Stateless fingerprint policy engine over a pluggable generator.
pub struct FingerprintManager<G> {
    generator: G,
    config: FingerprintConfig,
}

impl<G: FingerprintGenerator> FingerprintManager<G> {
    /// Engine with default configuration.
    pub fn new(generator: G) -> Self {
        Self::with_config(generator, FingerprintConfig::default())
    }

    pub fn with_config(generator: G, config: FingerprintConfig) -> Self {
        Self { generator, config }
    }

    pub fn config(&self) -> &FingerprintConfig {
        &self.config
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Catalogue names in order. The first entry is the fallback preset.
    pub fn list_presets() -> Vec<&'static str> {
        ApiPreset::list_presets()
    }
}
