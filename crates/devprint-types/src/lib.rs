//! # Devprint Types
//!
//! Core types, models, and error definitions for Devprint.
//!
//! This crate provides the foundational type system for the Devprint workspace:
//!
//! - **`error`** - Typed error hierarchy for fingerprints, accounts, and configuration
//! - **`models`** - Domain models (Account, ApiData, ApiPreset, FingerprintConfig)
//!
//! ## Architecture Role
//!
//! `devprint-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!     devprint-types (this crate)
//!             │
//!             ▼
//!       devprint-core
//!             │
//!             ▼
//!   GUI / automation callers
//! ```
//!
//! All types are designed to be:
//! - **Serializable** via serde for storage and IPC
//! - **Clone** for cheap sharing between workers
//! - **PartialEq** for testing and comparison

pub mod error;
pub mod models;

// Re-export error types for convenience
pub use error::{AccountError, ConfigError, FingerprintError};

// Re-export core model types
pub use models::{
    Account, ApiCredentials, ApiData, ApiPreset, FingerprintConfig, FingerprintValidation,
};
