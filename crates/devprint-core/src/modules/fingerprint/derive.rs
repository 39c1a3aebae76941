//! Fingerprint derivation.

use devprint_types::{Account, ApiCredentials, ApiData, ApiPreset, FingerprintError};
use tracing::{info, warn};

use super::FingerprintManager;
use crate::error::AppResult;
use crate::modules::generator::{resolve_with_fallback, FingerprintGenerator};

/// Pick the preset for a derivation: override, then stored, then default.
///
/// Unknown names degrade to the default preset.
pub(crate) fn effective_preset(account: &Account, preset_name: Option<&str>) -> ApiPreset {
    let requested = preset_name.filter(|s| !s.is_empty()).or_else(|| account.preset_name());

    let Some(name) = requested else {
        return ApiPreset::DEFAULT;
    };

    name.parse().unwrap_or_else(|_| {
        warn!(
            phone = %account.phone_number,
            preset = name,
            fallback = %ApiPreset::DEFAULT,
            "Invalid preset, falling back to default"
        );
        ApiPreset::DEFAULT
    })
}

impl<G: FingerprintGenerator> FingerprintManager<G> {
    /// Derive the fingerprint an account should present.
    ///
    /// An account that already carries device model, system version and app
    /// version keeps them; otherwise the generator is called with the
    /// account's seed. Does not mutate the account.
    ///
    /// Bad preset names never fail this call. The only error is
    /// [`FingerprintError::TemplateUnavailable`], when a fresh fingerprint is
    /// needed and neither the requested nor the default template exists.
    pub fn generate_api(&self, account: &Account, preset_name: Option<&str>) -> AppResult<ApiData> {
        let preset = effective_preset(account, preset_name);
        let resolved = resolve_with_fallback(&self.generator, preset);

        if account.has_complete_triple() {
            info!(
                phone = %account.phone_number,
                device_model = account.device_model().unwrap_or_default(),
                system_version = account.system_version().unwrap_or_default(),
                "Using existing fingerprint"
            );

            let template_credentials = match resolved {
                Some((_, template)) => template.credentials(),
                None => {
                    warn!(
                        phone = %account.phone_number,
                        preset = %preset,
                        "No template for credential fallback, using account credentials only"
                    );
                    ApiCredentials::default()
                },
            };
            return Ok(self.mirror_account(account, template_credentials));
        }

        let (preset, template) = resolved
            .ok_or_else(|| FingerprintError::TemplateUnavailable { preset: preset.to_string() })?;
        let seed = account.seed();

        info!(
            phone = %account.phone_number,
            preset = %preset,
            seed,
            "Generating new fingerprint"
        );

        let generated = template.generate(seed);

        info!(
            device_model = %generated.device_model,
            system_version = %generated.system_version,
            app_version = %generated.app_version,
            "Generated fingerprint"
        );

        Ok(generated)
    }

    /// Fingerprint built from the account's stored fields.
    ///
    /// An `api_id` of 0 or an empty `api_hash` counts as unset.
    fn mirror_account(&self, account: &Account, fallback: ApiCredentials) -> ApiData {
        let api_hash = account
            .api_hash
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .or(fallback.api_hash);

        ApiData {
            api_id: account.api_id.filter(|id| *id != 0).or(fallback.api_id),
            api_hash,
            device_model: account.device_model().unwrap_or_default().to_string(),
            system_version: account.system_version().unwrap_or_default().to_string(),
            app_version: account.app_version().unwrap_or_default().to_string(),
            lang_code: account.lang_code().unwrap_or(&self.config.default_lang_code).to_string(),
            system_lang_code: account
                .system_lang_code()
                .unwrap_or(&self.config.default_system_lang_code)
                .to_string(),
        }
    }
}
