//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Inspect the effective Lambda function configuration
#[derive(Parser, Debug)]
#[command(name = "lambda-config")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Dotenv file to load before resolving
    #[arg(long, global = true, env = "LAMBDA_CONFIG_ENV_FILE")]
    pub env_file: Option<PathBuf>,

    /// Override an environment variable for this run (NAME=VALUE)
    #[arg(long = "set", global = true, value_name = "NAME=VALUE", value_parser = parse_assignment)]
    pub overrides: Vec<(String, String)>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every effective value
    Show(ShowArgs),

    /// Print a single effective value
    Get(GetArgs),

    /// Show whether each value came from the environment or a default
    Sources(SourcesArgs),

    /// Print the compiled-in defaults, including unused ones
    Defaults(DefaultsArgs),
}

/// Output format
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Arguments for the show command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,

    /// Print values unmasked
    #[arg(long)]
    pub reveal: bool,
}

/// Arguments for the get command
#[derive(Parser, Debug)]
pub struct GetArgs {
    /// Logical key (e.g., "database_url")
    pub key: String,

    /// Print the value unmasked
    #[arg(long)]
    pub reveal: bool,
}

/// Arguments for the sources command
#[derive(Parser, Debug)]
pub struct SourcesArgs {
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

/// Arguments for the defaults command
#[derive(Parser, Debug)]
pub struct DefaultsArgs {
    /// Only this logical key, including unused ones (e.g., "github_token")
    pub key: Option<String>,

    /// Print values unmasked
    #[arg(long)]
    pub reveal: bool,
}

fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got '{raw}'")),
    }
}
