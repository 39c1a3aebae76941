//! Applying, rotating and ensuring fingerprints.

use chrono::Utc;
use devprint_types::{Account, ApiData, ApiPreset};
use rand::Rng;
use tracing::{error, info, warn};

use super::FingerprintManager;
use crate::error::AppResult;
use crate::modules::generator::FingerprintGenerator;
use crate::modules::store::{persist_account, AccountStore};

/// Generates a random lowercase hex string of the specified length.
fn random_hex(length: usize) -> String {
    const HEX_CHARS: &[u8] = b"0123456789abcdef";
    let mut rng = rand::thread_rng();
    (0..length).map(|_| char::from(HEX_CHARS[rng.gen_range(0..16)])).collect()
}

/// Next generation seed: old seed, unix time, and a random suffix so two
/// rotations within the same second still differ.
pub(crate) fn next_seed(current: &str) -> String {
    format!("{}_{}_{}", current, Utc::now().timestamp(), random_hex(6))
}

impl<G: FingerprintGenerator> FingerprintManager<G> {
    /// Copy a fingerprint onto the account and optionally persist it.
    ///
    /// Credentials are copied only for accounts using official credentials.
    /// A failed commit is returned to the caller; the in-memory account keeps
    /// the new fields in that case.
    pub fn apply_fingerprint_to_account(
        &self,
        account: &mut Account,
        api_data: &ApiData,
        store: Option<&dyn AccountStore>,
    ) -> AppResult<()> {
        account.device_model = Some(api_data.device_model.clone());
        account.system_version = Some(api_data.system_version.clone());
        account.app_version = Some(api_data.app_version.clone());
        account.lang_code = Some(api_data.lang_code.clone());
        account.system_lang_code = Some(api_data.system_lang_code.clone());

        if account.use_official_api {
            account.api_id = api_data.api_id;
            account.api_hash = api_data.api_hash.clone();
        }

        account.fingerprint_last_rotated = Some(Utc::now());

        info!(
            phone = %account.phone_number,
            device_model = %api_data.device_model,
            system_version = %api_data.system_version,
            "Applied fingerprint"
        );

        if let Some(store) = store {
            persist_account(store, account).inspect_err(|e| {
                error!(phone = %account.phone_number, error = %e, "Failed to save fingerprint");
            })?;
            info!(phone = %account.phone_number, "Saved fingerprint to database");
        }

        Ok(())
    }

    /// Replace the account's fingerprint with a freshly generated one.
    ///
    /// An unknown `new_preset` is rejected with `InvalidPreset` before anything
    /// is touched. The seed always changes, so the next fingerprint differs
    /// even when the preset stays the same.
    pub fn rotate_fingerprint(
        &self,
        account: &mut Account,
        new_preset: Option<&str>,
        store: Option<&dyn AccountStore>,
    ) -> AppResult<ApiData> {
        let new_preset = match new_preset.filter(|s| !s.is_empty()) {
            Some(name) => Some(name.parse::<ApiPreset>().inspect_err(|_| {
                warn!(
                    phone = %account.phone_number,
                    preset = name,
                    "Rejected rotation to unknown preset"
                );
            })?),
            None => None,
        };

        let mut rotated = account.clone();
        if let Some(preset) = new_preset {
            rotated.api_preset = Some(preset.to_string());
        }
        rotated.device_unique_id = Some(next_seed(account.seed()));

        info!(
            phone = %account.phone_number,
            from = account.device_model().unwrap_or("none"),
            preset = rotated.preset_name().unwrap_or(ApiPreset::DEFAULT.as_str()),
            "Rotating fingerprint"
        );

        // Reuse must not kick in for the rotated record.
        rotated.device_model = None;
        rotated.system_version = None;
        rotated.app_version = None;
        let new_api = self.generate_api(&rotated, None)?;

        account.api_preset = rotated.api_preset;
        account.device_unique_id = rotated.device_unique_id;
        self.apply_fingerprint_to_account(account, &new_api, store)?;

        Ok(new_api)
    }

    /// Return the account's fingerprint, generating and applying one if it is incomplete.
    ///
    /// A complete account is never written to, even with a store supplied.
    pub fn ensure_fingerprint(
        &self,
        account: &mut Account,
        store: Option<&dyn AccountStore>,
    ) -> AppResult<ApiData> {
        if self.validate_fingerprint(account).is_complete {
            return self.generate_api(account, None);
        }

        info!(phone = %account.phone_number, "Account missing fingerprint, generating");
        let api_data = self.generate_api(account, None)?;
        self.apply_fingerprint_to_account(account, &api_data, store)?;

        Ok(api_data)
    }
}
