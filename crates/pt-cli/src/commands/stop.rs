//! Stop command for closing a project's open session.

use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Utc};
use pt_core::TrackerData;

use super::minutes;

pub fn run<W: Write>(
    writer: &mut W,
    data: &mut TrackerData,
    name: &str,
    now: DateTime<Utc>,
) -> Result<()> {
    let outcome = pt_core::stop(data, name, now)?;
    writeln!(
        writer,
        "Stopped '{name}': {:.2}min (Total: {:.2}min)",
        minutes(outcome.duration),
        minutes(outcome.total)
    )?;
    Ok(())
}
