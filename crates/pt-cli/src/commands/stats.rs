//! Stats command for viewing a single project's time log.

use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Utc};
use pt_core::{SessionError, TrackerData, entry_stats};

use super::minutes;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn run<W: Write>(
    writer: &mut W,
    data: &TrackerData,
    name: &str,
    now: DateTime<Utc>,
) -> Result<()> {
    let project = data
        .get(name)
        .ok_or_else(|| SessionError::NotFound(name.to_string()))?;

    writeln!(writer, "===============================================")?;
    writeln!(writer, "Stats for {name}:")?;
    writeln!(writer, "===============================================")?;
    writeln!(
        writer,
        "Total Sessions: {} | Total Time: {:.2}min",
        project.logs.len(),
        minutes(project.total_time())
    )?;

    let entries = entry_stats(project, now);
    if entries.is_empty() {
        return Ok(());
    }

    writeln!(writer, "# | Start               | End                 | Duration(min)")?;
    writeln!(writer, "---|---------------------|---------------------|-------------")?;
    for entry in entries {
        let start = entry.start.format(TIMESTAMP_FORMAT).to_string();
        let end = entry.end.map_or_else(
            || "-".to_string(),
            |t| t.format(TIMESTAMP_FORMAT).to_string(),
        );
        writeln!(
            writer,
            "{:<3}| {:<20}| {:<20}| {:>6.2}",
            entry.index,
            start,
            end,
            minutes(entry.duration)
        )?;
    }

    Ok(())
}
