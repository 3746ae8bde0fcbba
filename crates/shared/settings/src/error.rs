//! Errors raised when naming configuration keys.
//!
//! Resolution itself never fails; only parsing a key name from user input can.

use thiserror::Error;

/// Configuration key errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("unknown configuration key '{key}' (expected one of: {expected})")]
    UnknownKey { key: String, expected: String },
}

impl SettingsError {
    pub fn unknown_key(key: impl Into<String>, expected: impl Into<String>) -> Self {
        SettingsError::UnknownKey {
            key: key.into(),
            expected: expected.into(),
        }
    }
}
