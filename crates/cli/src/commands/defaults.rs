//! Defaults command - dump the compiled-in table.

use std::io::Write;

use settings::constants::{default_for, DEFAULT_CONSTANTS};
use settings::SettingsError;

use crate::args::DefaultsArgs;
use crate::errors::AppResult;
use crate::output::display_value;

/// Execute the defaults command
pub fn execute<W: Write>(args: DefaultsArgs, out: &mut W) -> AppResult<()> {
    if let Some(key) = args.key {
        let value = default_for(&key).ok_or_else(|| {
            let known: Vec<_> = DEFAULT_CONSTANTS.iter().map(|entry| entry.key).collect();
            SettingsError::unknown_key(&key, known.join(", "))
        })?;
        writeln!(out, "{}", display_value(value, args.reveal))?;
        return Ok(());
    }

    for entry in DEFAULT_CONSTANTS {
        let marker = if entry.surfaced { "" } else { " (unused)" };
        writeln!(
            out,
            "{:<16} {}{}",
            entry.key,
            display_value(entry.value, args.reveal),
            marker
        )?;
    }
    Ok(())
}
