//! Integration tests for the CLI commands.
//!
//! Commands write into a buffer and read an in-memory environment, so these
//! tests do not depend on the real process environment.

use std::io::Write;

use clap::Parser;
use mockall::predicate::eq;

use lambda_config::{commands, load_env_file, AppError, Cli};
use settings::{EnvSource, MapEnv, MockEnvSource};

// =============================================================================
// Helpers
// =============================================================================

fn run(argv: &[&str], env: &impl EnvSource) -> Result<String, AppError> {
    let cli = Cli::try_parse_from(std::iter::once("lambda-config").chain(argv.iter().copied()))
        .expect("valid arguments");
    let mut out = Vec::new();
    commands::run(cli.command, env, &mut out)?;
    Ok(String::from_utf8(out).expect("utf-8 output"))
}

// =============================================================================
// show
// =============================================================================

#[test]
fn test_show_masks_by_default() {
    let output = run(&["show"], &MapEnv::new()).unwrap();

    assert_eq!(output.lines().count(), 5);
    assert!(output.contains("aws_access_key   AKIA****"));
    assert!(!output.contains("AKIAI44QH8DHBEXAMPLE"));
}

#[test]
fn test_show_json_reveal() {
    let env = MapEnv::new().with("DATABASE_URL", "postgres://u:p@host/db");

    let output = run(&["show", "--format", "json", "--reveal"], &env).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json.as_object().unwrap().len(), 5);
    assert_eq!(json["database_url"], "postgres://u:p@host/db");
    assert_eq!(json["aws_access_key"], "AKIAI44QH8DHBEXAMPLE");
}

// =============================================================================
// get
// =============================================================================

#[test]
fn test_get_reads_through_env_source() {
    let mut env = MockEnvSource::new();
    env.expect_get()
        .with(eq("SLACK_WEBHOOK_URL"))
        .returning(|_| Some("https://hooks.example.invalid/abc".to_string()));
    env.expect_get().returning(|_| None);

    let output = run(&["get", "slack_webhook", "--reveal"], &env).unwrap();

    assert_eq!(output, "https://hooks.example.invalid/abc\n");
}

#[test]
fn test_get_empty_value_is_passed_through() {
    let env = MapEnv::new().with("OPENAI_API_KEY", "");

    let output = run(&["get", "openai_key", "--reveal"], &env).unwrap();

    assert_eq!(output, "\n");
}

#[test]
fn test_get_unknown_key() {
    let err = run(&["get", "github_token"], &MapEnv::new()).unwrap_err();

    assert!(matches!(err, AppError::Settings(_)));
    assert!(err.to_string().contains("github_token"));
}

// =============================================================================
// sources / defaults
// =============================================================================

#[test]
fn test_sources_never_prints_values() {
    let env = MapEnv::new().with("AWS_SECRET_ACCESS_KEY", "very-secret-value");

    let output = run(&["sources"], &env).unwrap();

    assert!(!output.contains("very-secret-value"));
    let secret_line = output
        .lines()
        .find(|line| line.starts_with("aws_secret_key"))
        .unwrap();
    assert!(secret_line.contains("AWS_SECRET_ACCESS_KEY"));
    assert!(secret_line.ends_with("environment"));
    assert_eq!(output.matches("default").count(), 4);
}

#[test]
fn test_sources_json() {
    let output = run(&["sources", "--format", "json"], &MapEnv::new()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    let entries = json.as_array().unwrap();

    assert_eq!(entries.len(), 5);
    assert_eq!(entries[0]["key"], "aws_access_key");
    assert_eq!(entries[0]["env_var"], "AWS_ACCESS_KEY_ID");
    assert_eq!(entries[0]["source"], "default");
    assert!(entries[0].get("value").is_none());
}

#[test]
fn test_defaults_lists_unused_entries() {
    let output = run(&["defaults"], &MapEnv::new()).unwrap();

    assert_eq!(output.matches("(unused)").count(), 4);
    assert!(output.contains("anthropic_key"));
    assert!(output.contains("private_key"));
    assert!(!output.contains("BEGIN RSA"));
}

// =============================================================================
// env file
// =============================================================================

#[test]
fn test_env_file_is_loaded_into_process_env() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "LAMBDA_CONFIG_TEST_FROM_FILE=loaded").unwrap();

    load_env_file(Some(file.path())).unwrap();
    let loaded = std::env::var("LAMBDA_CONFIG_TEST_FROM_FILE");
    std::env::remove_var("LAMBDA_CONFIG_TEST_FROM_FILE");

    assert_eq!(loaded.as_deref(), Ok("loaded"));
}

#[test]
fn test_defaults_single_unused_key() {
    let output = run(&["defaults", "aws_region", "--reveal"], &MapEnv::new()).unwrap();
    assert_eq!(output, "us-west-2\n");

    let err = run(&["defaults", "region"], &MapEnv::new()).unwrap_err();
    assert!(err.to_string().contains("private_key"));
}

#[test]
fn test_missing_explicit_env_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.env");

    let err = load_env_file(Some(missing.as_path())).unwrap_err();

    assert!(matches!(err, AppError::EnvFile { .. }));
}
