//! Fingerprint engine, generator seam, account storage, config and logging.

pub mod config;
pub mod fingerprint;
pub mod generator;
pub mod logger;
pub mod store;
