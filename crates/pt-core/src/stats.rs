//! Read-side aggregation over a tracker snapshot.
//!
//! Nothing in this module mutates the snapshot or persists anything. Live
//! durations for open sessions are derived fresh from the instant passed in
//! by the caller, so two reports generated at different instants see
//! different live totals for the same snapshot.

use chrono::{DateTime, TimeDelta, Utc};

use crate::model::{Project, TrackerData};

/// One row of the summary report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub name: String,

    /// Number of sessions, open ones included.
    pub sessions: usize,

    /// Effective total at the report instant.
    pub total: TimeDelta,

    /// Share of the grand total, in percent. Zero when the grand total is
    /// zero.
    pub percent: f64,
}

/// Summary report across all projects.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Rows ranked by effective total, largest first. Ties keep snapshot
    /// order.
    pub rows: Vec<ReportRow>,

    /// Sum of effective totals across all projects.
    pub grand_total: TimeDelta,
}

/// One log entry of a project's stats view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryStat {
    /// 1-based position in the project's log.
    pub index: usize,

    pub start: DateTime<Utc>,

    /// `None` while the session is still open.
    pub end: Option<DateTime<Utc>>,

    /// Fixed `end - start` for closed entries, live `now - start` for the
    /// open one.
    pub duration: TimeDelta,
}

/// An open session at a given instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSession {
    pub name: String,
    pub started: DateTime<Utc>,
    pub elapsed: TimeDelta,
}

/// A project's accumulated time plus, if it is active, the live elapsed
/// time of its open session.
///
/// The live part is never persisted; it is recomputed on every call.
#[must_use]
pub fn effective_total(project: &Project, now: DateTime<Utc>) -> TimeDelta {
    let live = project
        .open_entry()
        .map_or_else(TimeDelta::zero, |entry| now - entry.start);
    project.total_time() + live
}

/// Builds the summary report for the whole snapshot at instant `now`.
#[must_use]
pub fn report(data: &TrackerData, now: DateTime<Utc>) -> Report {
    let grand_total = data
        .projects
        .iter()
        .map(|p| effective_total(p, now))
        .fold(TimeDelta::zero(), |acc, total| acc + total);

    let mut rows: Vec<ReportRow> = data
        .projects
        .iter()
        .map(|project| {
            let total = effective_total(project, now);
            ReportRow {
                name: project.name.clone(),
                sessions: project.logs.len(),
                total,
                percent: percent_of(total, grand_total),
            }
        })
        .collect();
    // Stable sort keeps snapshot order between equal totals.
    rows.sort_by_key(|row| std::cmp::Reverse(row.total));

    Report { rows, grand_total }
}

/// Per-entry view of a single project's log at instant `now`.
#[must_use]
pub fn entry_stats(project: &Project, now: DateTime<Utc>) -> Vec<EntryStat> {
    project
        .logs
        .iter()
        .enumerate()
        .map(|(i, entry)| EntryStat {
            index: i + 1,
            start: entry.start,
            end: entry.end,
            duration: entry.duration(now),
        })
        .collect()
}

/// All currently open sessions with their live elapsed time, in snapshot
/// order.
#[must_use]
pub fn active_sessions(data: &TrackerData, now: DateTime<Utc>) -> Vec<ActiveSession> {
    data.projects
        .iter()
        .filter_map(|project| {
            project.open_entry().map(|entry| ActiveSession {
                name: project.name.clone(),
                started: entry.start,
                elapsed: now - entry.start,
            })
        })
        .collect()
}

#[allow(clippy::cast_precision_loss, reason = "totals fit f64 comfortably")]
fn percent_of(total: TimeDelta, grand_total: TimeDelta) -> f64 {
    let grand_ms = grand_total.num_milliseconds();
    if grand_ms == 0 {
        return 0.0;
    }
    total.num_milliseconds() as f64 / grand_ms as f64 * 100.0
}
