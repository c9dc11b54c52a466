//! Status command for showing active tracking sessions.

use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Utc};
use pt_core::{TrackerData, active_sessions};

use super::minutes;

pub fn run<W: Write>(writer: &mut W, data: &TrackerData, now: DateTime<Utc>) -> Result<()> {
    writeln!(writer, "Active Sessions:")?;

    let sessions = active_sessions(data, now);
    if sessions.is_empty() {
        writeln!(writer, "None")?;
        return Ok(());
    }

    for session in sessions {
        writeln!(
            writer,
            "* {:<10} | Started: {} | Elapsed: {:.2}min",
            session.name,
            session.started.format("%H:%M:%S"),
            minutes(session.elapsed)
        )?;
    }

    Ok(())
}
