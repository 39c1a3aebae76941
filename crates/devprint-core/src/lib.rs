//! # Devprint Core
//!
//! Device fingerprint lifecycle for messaging-client accounts.
//!
//! ## Layout
//!
//! ```text
//! devprint-core/src/
//! ├── modules/
//! │   ├── fingerprint/  # policy engine: derive, apply, rotate, ensure, validate
//! │   ├── generator.rs  # seam to the external device template catalogue
//! │   ├── store/        # AccountStore seam + SQLite implementation
//! │   ├── config.rs     # devprint_config.json loading
//! │   └── logger.rs     # tracing subscriber setup
//! └── utils/paths.rs    # data directory resolution
//! ```
//!
//! The engine never owns accounts. Callers hand in an `Account`, the engine
//! reads and mutates it, and persistence happens only through an explicitly
//! passed store.

#![cfg_attr(test, allow(clippy::panic, clippy::assertions_on_result_states))]

pub mod error;
pub mod modules;
pub mod utils;

// Re-export commonly used types
pub use devprint_types::{
    Account, ApiCredentials, ApiData, ApiPreset, FingerprintConfig, FingerprintValidation,
};
pub use error::{AppError, AppResult};
pub use modules::fingerprint::FingerprintManager;
pub use modules::generator::{DeviceTemplate, FingerprintGenerator};
pub use modules::store::{AccountStore, SqliteAccountStore, StoreSession};
