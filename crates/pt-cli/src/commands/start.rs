//! Start command for opening a session on a project.

use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Utc};
use pt_core::TrackerData;

pub fn run<W: Write>(
    writer: &mut W,
    data: &mut TrackerData,
    name: &str,
    now: DateTime<Utc>,
) -> Result<()> {
    pt_core::start(data, name, now)?;
    writeln!(writer, "Started '{name}' at {}", now.to_rfc2822())?;
    Ok(())
}
