//! Lambda function configuration.
//!
//! This crate provides:
//! - Compiled-in default constants
//! - An injectable environment lookup
//! - The resolver that overlays environment values on the defaults

pub mod constants;
pub mod env;
pub mod error;
pub mod resolver;

pub use env::{EnvSource, LayeredEnv, MapEnv, ProcessEnv};
pub use error::SettingsError;
pub use resolver::{
    resolve, resolve_report, resolve_with, ConfigKey, EffectiveConfig, ResolvedEntry, ValueSource,
};

#[cfg(any(test, feature = "test-utils"))]
pub use env::MockEnvSource;
