//! Effective configuration resolved from the environment.
//!
//! Each logical key takes the value of its environment variable when that
//! variable is set, and the compiled-in default otherwise. An empty value is
//! still a set value and is returned as-is. Nothing is parsed or validated.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::constants::{
    DEFAULT_AWS_ACCESS_KEY, DEFAULT_AWS_SECRET_KEY, DEFAULT_DATABASE_URL, DEFAULT_OPENAI_KEY,
    DEFAULT_SLACK_WEBHOOK, ENV_AWS_ACCESS_KEY_ID, ENV_AWS_SECRET_ACCESS_KEY, ENV_DATABASE_URL,
    ENV_OPENAI_API_KEY, ENV_SLACK_WEBHOOK_URL,
};
use crate::env::{EnvSource, ProcessEnv};
use crate::error::SettingsError;

/// Logical keys returned by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigKey {
    AwsAccessKey,
    AwsSecretKey,
    DatabaseUrl,
    OpenaiKey,
    SlackWebhook,
}

impl ConfigKey {
    /// All keys, in output order.
    pub const ALL: [ConfigKey; 5] = [
        ConfigKey::AwsAccessKey,
        ConfigKey::AwsSecretKey,
        ConfigKey::DatabaseUrl,
        ConfigKey::OpenaiKey,
        ConfigKey::SlackWebhook,
    ];

    /// Logical key name, e.g. `database_url`.
    pub fn as_str(self) -> &'static str {
        match self {
            ConfigKey::AwsAccessKey => "aws_access_key",
            ConfigKey::AwsSecretKey => "aws_secret_key",
            ConfigKey::DatabaseUrl => "database_url",
            ConfigKey::OpenaiKey => "openai_key",
            ConfigKey::SlackWebhook => "slack_webhook",
        }
    }

    /// Environment variable that overrides this key.
    pub fn env_var(self) -> &'static str {
        match self {
            ConfigKey::AwsAccessKey => ENV_AWS_ACCESS_KEY_ID,
            ConfigKey::AwsSecretKey => ENV_AWS_SECRET_ACCESS_KEY,
            ConfigKey::DatabaseUrl => ENV_DATABASE_URL,
            ConfigKey::OpenaiKey => ENV_OPENAI_API_KEY,
            ConfigKey::SlackWebhook => ENV_SLACK_WEBHOOK_URL,
        }
    }

    /// Compiled-in fallback.
    pub fn default_value(self) -> &'static str {
        match self {
            ConfigKey::AwsAccessKey => DEFAULT_AWS_ACCESS_KEY,
            ConfigKey::AwsSecretKey => DEFAULT_AWS_SECRET_KEY,
            ConfigKey::DatabaseUrl => DEFAULT_DATABASE_URL,
            ConfigKey::OpenaiKey => DEFAULT_OPENAI_KEY,
            ConfigKey::SlackWebhook => DEFAULT_SLACK_WEBHOOK,
        }
    }

    /// Comma-separated list of every logical key name.
    pub fn names() -> String {
        Self::ALL
            .iter()
            .map(|key| key.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigKey {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| SettingsError::unknown_key(s, Self::names()))
    }
}

/// Where an effective value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueSource {
    Environment,
    Default,
}

impl fmt::Display for ValueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueSource::Environment => f.write_str("environment"),
            ValueSource::Default => f.write_str("default"),
        }
    }
}

/// One resolved key with its provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedEntry {
    pub key: ConfigKey,
    pub env_var: &'static str,
    pub source: ValueSource,
    #[serde(skip_serializing)]
    pub value: String,
}

/// The resolved configuration. Always holds all five keys.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct EffectiveConfig {
    pub aws_access_key: String,
    pub aws_secret_key: String,
    pub database_url: String,
    pub openai_key: String,
    pub slack_webhook: String,
}

impl fmt::Debug for EffectiveConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EffectiveConfig")
            .field("aws_access_key", &"[REDACTED]")
            .field("aws_secret_key", &"[REDACTED]")
            .field("database_url", &"[REDACTED]")
            .field("openai_key", &"[REDACTED]")
            .field("slack_webhook", &"[REDACTED]")
            .finish()
    }
}

impl Default for EffectiveConfig {
    /// The compiled-in defaults, as if no variable were set.
    fn default() -> Self {
        Self {
            aws_access_key: DEFAULT_AWS_ACCESS_KEY.to_string(),
            aws_secret_key: DEFAULT_AWS_SECRET_KEY.to_string(),
            database_url: DEFAULT_DATABASE_URL.to_string(),
            openai_key: DEFAULT_OPENAI_KEY.to_string(),
            slack_webhook: DEFAULT_SLACK_WEBHOOK.to_string(),
        }
    }
}

impl EffectiveConfig {
    /// Effective value for `key`.
    pub fn get(&self, key: ConfigKey) -> &str {
        match key {
            ConfigKey::AwsAccessKey => &self.aws_access_key,
            ConfigKey::AwsSecretKey => &self.aws_secret_key,
            ConfigKey::DatabaseUrl => &self.database_url,
            ConfigKey::OpenaiKey => &self.openai_key,
            ConfigKey::SlackWebhook => &self.slack_webhook,
        }
    }

    /// All five `(key, value)` pairs in output order.
    pub fn entries(&self) -> impl Iterator<Item = (ConfigKey, &str)> + '_ {
        ConfigKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }

    /// Logical key name to value.
    pub fn to_map(&self) -> BTreeMap<&'static str, String> {
        self.entries()
            .map(|(key, value)| (key.as_str(), value.to_string()))
            .collect()
    }
}

/// Resolve against the real process environment.
pub fn resolve() -> EffectiveConfig {
    resolve_with(&ProcessEnv)
}

/// Resolve against an arbitrary environment lookup.
pub fn resolve_with<E: EnvSource + ?Sized>(env: &E) -> EffectiveConfig {
    let value = |key: ConfigKey| lookup(env, key).0;

    EffectiveConfig {
        aws_access_key: value(ConfigKey::AwsAccessKey),
        aws_secret_key: value(ConfigKey::AwsSecretKey),
        database_url: value(ConfigKey::DatabaseUrl),
        openai_key: value(ConfigKey::OpenaiKey),
        slack_webhook: value(ConfigKey::SlackWebhook),
    }
}

/// Resolve every key and report where each value came from.
pub fn resolve_report<E: EnvSource + ?Sized>(env: &E) -> Vec<ResolvedEntry> {
    ConfigKey::ALL
        .into_iter()
        .map(|key| {
            let (value, source) = lookup(env, key);
            ResolvedEntry {
                key,
                env_var: key.env_var(),
                source,
                value,
            }
        })
        .collect()
}

fn lookup<E: EnvSource + ?Sized>(env: &E, key: ConfigKey) -> (String, ValueSource) {
    match env.get(key.env_var()) {
        Some(value) => {
            tracing::debug!(
                key = key.as_str(),
                variable = key.env_var(),
                "Using environment value"
            );
            (value, ValueSource::Environment)
        }
        None => {
            tracing::debug!(key = key.as_str(), "Using compiled-in default");
            (key.default_value().to_string(), ValueSource::Default)
        }
    }
}
