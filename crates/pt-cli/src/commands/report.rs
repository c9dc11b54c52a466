//! Report command for the all-projects summary.
//!
//! Renders the aggregator's [`Report`] either as the classic table (ranked
//! by effective total, percent column, grand total footer) or as JSON.

use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Utc};
use pt_core::{Report, TrackerData, report};
use serde::Serialize;

use super::minutes;

/// JSON report structure.
#[derive(Debug, Serialize)]
struct JsonReport {
    generated_at: String,
    total_minutes: f64,
    projects: Vec<JsonRow>,
}

#[derive(Debug, Serialize)]
struct JsonRow {
    name: String,
    sessions: usize,
    minutes: f64,
    percent: f64,
}

pub fn run<W: Write>(
    writer: &mut W,
    data: &TrackerData,
    now: DateTime<Utc>,
    json: bool,
) -> Result<()> {
    if data.projects.is_empty() {
        writeln!(writer, "No projects.")?;
        return Ok(());
    }

    let report = report(data, now);
    if json {
        write_json(writer, &report, now)
    } else {
        write_table(writer, &report)
    }
}

fn write_table<W: Write>(writer: &mut W, report: &Report) -> Result<()> {
    writeln!(
        writer,
        "==================================================================="
    )?;
    writeln!(writer, "Summary Report: All Projects")?;
    writeln!(
        writer,
        "==================================================================="
    )?;
    writeln!(
        writer,
        "{:<16} | {:<8} | {:<10} | Percent",
        "Project", "Sessions", "Time(min)"
    )?;
    writeln!(writer, "-----------------|----------|------------|--------")?;
    for row in &report.rows {
        writeln!(
            writer,
            "{:<16} | {:<8} | {:<10.2} | {:>6.2}%",
            row.name,
            row.sessions,
            minutes(row.total),
            row.percent
        )?;
    }
    writeln!(
        writer,
        "-------------------------------------------------------------------"
    )?;
    writeln!(
        writer,
        "Total time tracked: {:.2} minutes",
        minutes(report.grand_total)
    )?;
    Ok(())
}

fn write_json<W: Write>(writer: &mut W, report: &Report, now: DateTime<Utc>) -> Result<()> {
    let json = JsonReport {
        generated_at: now.to_rfc3339(),
        total_minutes: minutes(report.grand_total),
        projects: report
            .rows
            .iter()
            .map(|row| JsonRow {
                name: row.name.clone(),
                sessions: row.sessions,
                minutes: minutes(row.total),
                percent: row.percent,
            })
            .collect(),
    };
    writeln!(writer, "{}", serde_json::to_string_pretty(&json)?)?;
    Ok(())
}
