//! Command-line surface over the `settings` resolver.
//!
//! # CLI Usage
//!
//! ```bash
//! # Print the effective configuration (masked)
//! lambda-config show
//!
//! # Print one value in full
//! lambda-config get database_url --reveal
//!
//! # Where did each value come from?
//! lambda-config --env-file .env.staging sources
//! ```

pub mod args;
pub mod commands;
pub mod errors;
pub mod output;

use std::path::Path;

use settings::{LayeredEnv, MapEnv, ProcessEnv};

pub use args::{Cli, Commands};
pub use errors::{AppError, AppResult};

/// Load a dotenv file into the process environment.
///
/// Variables already set are left untouched. With no explicit path a missing
/// `.env` is ignored; an explicit path must exist.
pub fn load_env_file(path: Option<&Path>) -> AppResult<()> {
    match path {
        Some(path) => {
            dotenvy::from_path(path).map_err(|e| AppError::env_file(path, e))?;
            tracing::debug!("Loaded env file {}", path.display());
        }
        None => match dotenvy::dotenv() {
            Ok(path) => tracing::debug!("Loaded env file {}", path.display()),
            Err(e) if e.not_found() => tracing::debug!("No .env file found"),
            Err(e) => return Err(AppError::env_file(".env", e)),
        },
    }
    Ok(())
}

/// Process environment with `--set` overrides layered on top.
pub fn build_env(overrides: Vec<(String, String)>) -> LayeredEnv<ProcessEnv> {
    LayeredEnv::new(overrides.into_iter().collect::<MapEnv>(), ProcessEnv)
}
