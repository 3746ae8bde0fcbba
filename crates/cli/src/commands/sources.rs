//! Sources command - report where each value came from.
//!
//! Values are never printed here.

use std::io::Write;

use settings::{resolve_report, EnvSource};

use crate::args::{OutputFormat, SourcesArgs};
use crate::errors::AppResult;

/// Execute the sources command
pub fn execute<E, W>(args: SourcesArgs, env: &E, out: &mut W) -> AppResult<()>
where
    E: EnvSource + ?Sized,
    W: Write,
{
    let report = resolve_report(env);

    match args.format {
        OutputFormat::Text => {
            for entry in &report {
                writeln!(
                    out,
                    "{:<16} {:<24} {}",
                    entry.key.as_str(),
                    entry.env_var,
                    entry.source
                )?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }

    Ok(())
}
