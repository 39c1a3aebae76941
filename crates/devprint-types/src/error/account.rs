//! Account-related errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during account storage operations.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum AccountError {
    /// Account with given phone number not found
    #[error("Account not found: {phone_number}")]
    NotFound {
        /// Phone number of the missing account
        phone_number: String,
    },

    /// Staged records could not be written
    #[error("Account storage error: {message}")]
    StorageError {
        /// Description of the storage failure
        message: String,
    },

    /// Stored record could not be decoded into an account
    #[error("Corrupted account record {phone_number}: {message}")]
    Corrupted {
        /// Phone number of the broken record
        phone_number: String,
        /// Description of the decode failure
        message: String,
    },
}
