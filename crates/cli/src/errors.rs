//! CLI error handling.

use std::path::PathBuf;

use settings::SettingsError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("Failed to load env file {}: {source}", .path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn env_file(path: impl Into<PathBuf>, source: dotenvy::Error) -> Self {
        AppError::EnvFile {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;
