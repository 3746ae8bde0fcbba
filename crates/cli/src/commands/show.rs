//! Show command - print every effective value.

use std::io::Write;

use settings::{resolve_with, EnvSource};

use crate::args::{OutputFormat, ShowArgs};
use crate::errors::AppResult;
use crate::output::display_value;

/// Execute the show command
pub fn execute<E, W>(args: ShowArgs, env: &E, out: &mut W) -> AppResult<()>
where
    E: EnvSource + ?Sized,
    W: Write,
{
    let config = resolve_with(env);
    tracing::debug!(reveal = args.reveal, "Showing effective configuration");

    match args.format {
        OutputFormat::Text => {
            for (key, value) in config.entries() {
                writeln!(out, "{:<16} {}", key.as_str(), display_value(value, args.reveal))?;
            }
        }
        OutputFormat::Json => {
            let mut rendered = config.to_map();
            for value in rendered.values_mut() {
                *value = display_value(value, args.reveal);
            }
            serde_json::to_writer_pretty(&mut *out, &rendered)?;
            writeln!(out)?;
        }
    }

    Ok(())
}
