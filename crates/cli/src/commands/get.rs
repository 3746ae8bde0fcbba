//! Get command - print one effective value.

use std::io::Write;

use settings::{resolve_with, ConfigKey, EnvSource};

use crate::args::GetArgs;
use crate::errors::AppResult;
use crate::output::display_value;

/// Execute the get command
pub fn execute<E, W>(args: GetArgs, env: &E, out: &mut W) -> AppResult<()>
where
    E: EnvSource + ?Sized,
    W: Write,
{
    let key: ConfigKey = args.key.parse()?;
    let config = resolve_with(env);

    writeln!(out, "{}", display_value(config.get(key), args.reveal))?;
    Ok(())
}
