//! Core domain models for Devprint.

mod account;
mod config;
mod fingerprint;
mod preset;

// Re-export all models
pub use account::Account;
pub use config::FingerprintConfig;
pub use fingerprint::{ApiCredentials, ApiData, FingerprintValidation};
pub use preset::ApiPreset;
