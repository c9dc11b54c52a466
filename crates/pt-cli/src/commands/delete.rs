//! Delete command with interactive confirmation.

use std::io::{BufRead, Write};

use anyhow::Result;
use pt_core::{SessionError, TrackerData};

/// Deletes a project after confirmation. Returns whether the snapshot was
/// mutated (declined confirmations leave it untouched).
pub fn run<W: Write, R: BufRead>(
    writer: &mut W,
    input: &mut R,
    data: &mut TrackerData,
    name: &str,
    yes: bool,
) -> Result<bool> {
    // Check existence before prompting so an unknown name fails fast.
    if !data.contains(name) {
        return Err(SessionError::NotFound(name.to_string()).into());
    }

    if !yes {
        write!(writer, "Delete '{name}' and all its logs? [y/N]: ")?;
        writer.flush()?;
        let mut answer = String::new();
        input.read_line(&mut answer)?;
        if !matches!(answer.trim(), "y" | "Y") {
            writeln!(writer, "Cancelled.")?;
            return Ok(false);
        }
    }

    pt_core::delete(data, name)?;
    writeln!(writer, "Deleted '{name}'.")?;
    Ok(true)
}
