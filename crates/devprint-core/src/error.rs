//! Unified error types for Devprint Core.

use devprint_types::{AccountError, ConfigError, FingerprintError};
use serde::Serialize;
use thiserror::Error;

/// Main error type for all Devprint operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AppError {
    /// Database operation failed (SQLite).
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Fingerprint policy rejected the request.
    #[error(transparent)]
    Fingerprint(#[from] FingerprintError),

    /// Account store operation failed.
    #[error(transparent)]
    Account(#[from] AccountError),

    /// Configuration loading or saving failed.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl AppError {
    /// The request named a preset outside the catalogue.
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::Fingerprint(FingerprintError::InvalidPreset { .. }))
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_str())
    }
}

/// Result type alias for Devprint operations.
pub type AppResult<T> = Result<T, AppError>;
