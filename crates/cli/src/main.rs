//! lambda-config - application entry point
//!
//! CLI-based entry point that dispatches to the configuration commands.

use std::io;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lambda_config::{build_env, commands, load_env_file, Cli};

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let result = load_env_file(cli.env_file.as_deref()).and_then(|()| {
        let env = build_env(cli.overrides);
        tracing::debug!("Resolving configuration");
        commands::run(cli.command, &env, &mut io::stdout().lock())
    });

    if let Err(e) = result {
        tracing::error!("Command failed: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
