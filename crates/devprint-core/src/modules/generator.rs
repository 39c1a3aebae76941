//! Seam to the external fingerprint generator.
//!
//! The device catalogue and the seed-to-values algorithm live outside this
//! crate. Callers plug them in by implementing these two traits.

use devprint_types::{ApiCredentials, ApiData, ApiPreset};

/// A single preset's device template.
pub trait DeviceTemplate: Send + Sync {
    /// Credentials shipped with the preset's official build.
    fn credentials(&self) -> ApiCredentials;

    /// Derive a fingerprint. Must be deterministic for a fixed seed.
    fn generate(&self, seed: &str) -> ApiData;
}

/// Lookup from catalogue entry to template.
pub trait FingerprintGenerator: Send + Sync {
    /// `None` when the generator has no template for the preset.
    fn resolve(&self, preset: ApiPreset) -> Option<&dyn DeviceTemplate>;
}

/// Resolve `preset`, falling back to the default template.
///
/// Returns the preset actually resolved alongside its template.
pub(crate) fn resolve_with_fallback<G>(
    generator: &G,
    preset: ApiPreset,
) -> Option<(ApiPreset, &dyn DeviceTemplate)>
where
    G: FingerprintGenerator + ?Sized,
{
    if let Some(template) = generator.resolve(preset) {
        return Some((preset, template));
    }

    let fallback = if preset == ApiPreset::DEFAULT {
        None
    } else {
        tracing::error!(
            preset = %preset,
            fallback = %ApiPreset::DEFAULT,
            "Preset has no device template, using default template"
        );
        generator.resolve(ApiPreset::DEFAULT)
    };

    if fallback.is_none() {
        tracing::error!(
            preset = %preset,
            default = %ApiPreset::DEFAULT,
            "Default device template unavailable"
        );
    }
    fallback.map(|t| (ApiPreset::DEFAULT, t))
}
