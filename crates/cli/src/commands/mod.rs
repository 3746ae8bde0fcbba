//! Commands module - CLI command implementations.

pub mod defaults;
pub mod get;
pub mod show;
pub mod sources;

use std::io::Write;

use settings::EnvSource;

use crate::args::Commands;
use crate::errors::AppResult;

/// Dispatch a parsed command.
pub fn run<E, W>(command: Commands, env: &E, out: &mut W) -> AppResult<()>
where
    E: EnvSource + ?Sized,
    W: Write,
{
    match command {
        Commands::Show(args) => show::execute(args, env, out),
        Commands::Get(args) => get::execute(args, env, out),
        Commands::Sources(args) => sources::execute(args, env, out),
        Commands::Defaults(args) => defaults::execute(args, out),
    }
}
