//! Session state machine: start/stop transitions over a project's log.
//!
//! Each project is either **Idle** (no logs, or last log closed) or
//! **Active** (last log open). The functions here enforce the transitions
//! and keep `total_time_ms` in sync with the closed entries. They mutate the
//! in-memory snapshot only; persisting the result is the caller's concern.
//!
//! All functions leave the snapshot untouched when they return an error.

use chrono::{DateTime, TimeDelta, Utc};
use thiserror::Error;

use crate::model::{LogEntry, Project, TrackerData};

/// Errors from project lifecycle and session transitions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The named project does not exist.
    #[error("project '{0}' not found")]
    NotFound(String),

    /// A project with this name already exists.
    #[error("project '{0}' already exists")]
    AlreadyExists(String),

    /// `start` was called while the project has an open session.
    #[error("project '{0}' is already active")]
    AlreadyActive(String),

    /// `stop` was called while the project has no open session.
    #[error("project '{0}' is not active")]
    NotActive(String),

    /// Project names must be non-empty.
    #[error("project name cannot be empty")]
    EmptyName,
}

/// Result of a successful `stop`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopOutcome {
    /// Duration of the session that was just closed.
    pub duration: TimeDelta,

    /// The project's accumulated total after closing it.
    pub total: TimeDelta,
}

/// Creates an empty, idle project.
pub fn create(data: &mut TrackerData, name: &str) -> Result<(), SessionError> {
    if name.is_empty() {
        return Err(SessionError::EmptyName);
    }
    if data.contains(name) {
        return Err(SessionError::AlreadyExists(name.to_string()));
    }
    data.projects.push(Project::new(name));
    tracing::debug!(project = name, "created project");
    Ok(())
}

/// Removes a project and all its logs irrecoverably.
pub fn delete(data: &mut TrackerData, name: &str) -> Result<(), SessionError> {
    let index = data
        .projects
        .iter()
        .position(|p| p.name == name)
        .ok_or_else(|| SessionError::NotFound(name.to_string()))?;
    data.projects.remove(index);
    tracing::debug!(project = name, "deleted project");
    Ok(())
}

/// Opens a new session on an idle project.
///
/// Appends an open [`LogEntry`] starting at `now`. The accumulated total is
/// unchanged; it only moves on [`stop`].
pub fn start(data: &mut TrackerData, name: &str, now: DateTime<Utc>) -> Result<(), SessionError> {
    let project = data
        .get_mut(name)
        .ok_or_else(|| SessionError::NotFound(name.to_string()))?;
    if project.is_active() {
        return Err(SessionError::AlreadyActive(name.to_string()));
    }
    project.logs.push(LogEntry::open_at(now));
    tracing::debug!(project = name, %now, "session started");
    Ok(())
}

/// Closes the open session on an active project.
///
/// Sets `end = now` on the open entry and adds its duration to the project's
/// accumulated total. A zero duration (start and stop at the same instant)
/// is valid. If the supplied `now` precedes the open entry's start (clock
/// adjusted backward), the negative duration is recorded as given.
pub fn stop(
    data: &mut TrackerData,
    name: &str,
    now: DateTime<Utc>,
) -> Result<StopOutcome, SessionError> {
    let project = data
        .get_mut(name)
        .ok_or_else(|| SessionError::NotFound(name.to_string()))?;
    let Some(entry) = project.logs.last_mut().filter(|e| e.is_open()) else {
        return Err(SessionError::NotActive(name.to_string()));
    };

    entry.end = Some(now);
    let duration = now - entry.start;
    project.total_time_ms += duration.num_milliseconds();
    tracing::debug!(
        project = name,
        duration_ms = duration.num_milliseconds(),
        total_ms = project.total_time_ms,
        "session stopped"
    );

    Ok(StopOutcome {
        duration,
        total: project.total_time(),
    })
}
