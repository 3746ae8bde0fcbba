//! Environment lookup abstraction.
//!
//! The resolver reads variables through [`EnvSource`] so callers can swap the
//! real process environment for an in-memory one.

use std::collections::HashMap;
use std::env;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Read-only key-value environment lookup.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait EnvSource: Send + Sync {
    /// Value of `name`, or `None` when it is not set.
    ///
    /// An empty string is a set value.
    fn get(&self, name: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        let raw = env::var_os(name)?;
        match raw.into_string() {
            Ok(value) => Some(value),
            Err(raw) => {
                tracing::warn!(
                    variable = name,
                    "Environment value is not unicode, decoding lossily"
                );
                Some(raw.to_string_lossy().into_owned())
            }
        }
    }
}

/// In-memory environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.vars.remove(name)
    }
}

impl EnvSource for MapEnv {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Consults `overrides` first, then `base`.
#[derive(Debug, Clone)]
pub struct LayeredEnv<B> {
    overrides: MapEnv,
    base: B,
}

impl<B: EnvSource> LayeredEnv<B> {
    pub fn new(overrides: MapEnv, base: B) -> Self {
        Self { overrides, base }
    }
}

impl<B: EnvSource> EnvSource for LayeredEnv<B> {
    fn get(&self, name: &str) -> Option<String> {
        self.overrides.get(name).or_else(|| self.base.get(name))
    }
}
