//! Tracker data model: log entries, projects, and the full snapshot.
//!
//! # Persisted Layout
//!
//! The snapshot serializes to a single JSON object:
//!
//! ```json
//! {
//!   "projects": [
//!     {
//!       "name": "my_website",
//!       "logs": [
//!         { "start": "2025-01-01T09:00:00Z", "end": "2025-01-01T09:30:00Z" },
//!         { "start": "2025-01-01T10:00:00Z" }
//!       ],
//!       "total_time_ms": 1800000
//!     }
//!   ]
//! }
//! ```
//!
//! Timestamps are RFC 3339 UTC. An absent `end` means the entry is still
//! open; at most the last entry of a project may be open. `total_time_ms`
//! accumulates closed sessions only and is persisted rather than recomputed
//! from the log detail.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// One contiguous start-stop interval of tracked time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// When the session started (UTC).
    pub start: DateTime<Utc>,

    /// When the session ended. `None` means the session is still open.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
}

impl LogEntry {
    /// Creates an open entry starting at the given instant.
    #[must_use]
    pub const fn open_at(start: DateTime<Utc>) -> Self {
        Self { start, end: None }
    }

    /// Whether the entry has no end yet.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.end.is_none()
    }

    /// Duration of the entry at instant `now`.
    ///
    /// Closed entries report their fixed historical `end - start`; open
    /// entries report the live `now - start`.
    #[must_use]
    pub fn duration(&self, now: DateTime<Utc>) -> TimeDelta {
        self.end.unwrap_or(now) - self.start
    }
}

/// A named project with its ordered session log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique, case-sensitive identifier.
    pub name: String,

    /// Sessions in insertion order, which is also chronological order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub logs: Vec<LogEntry>,

    /// Accumulated milliseconds across closed sessions only.
    ///
    /// Updated incrementally on every stop; never recomputed from `logs`.
    #[serde(default)]
    pub total_time_ms: i64,
}

impl Project {
    /// Creates an empty, idle project.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            logs: Vec::new(),
            total_time_ms: 0,
        }
    }

    /// Whether the project has an open session.
    ///
    /// A project is active iff its log is non-empty and the last entry has
    /// no end. This predicate is the single source of truth for the
    /// Idle/Active distinction.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.logs.last().is_some_and(LogEntry::is_open)
    }

    /// The currently open entry, if any.
    #[must_use]
    pub fn open_entry(&self) -> Option<&LogEntry> {
        self.logs.last().filter(|entry| entry.is_open())
    }

    /// Accumulated closed-session time as a duration.
    #[must_use]
    pub fn total_time(&self) -> TimeDelta {
        TimeDelta::milliseconds(self.total_time_ms)
    }
}

/// The full collection of tracked projects.
///
/// Projects are kept in insertion order so listings and reports are stable
/// across invocations. Names are unique; lookup is a linear scan, which is
/// fine at the scale of a personal tracker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerData {
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl TrackerData {
    /// Looks up a project by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.name == name)
    }

    /// Looks up a project by name for mutation.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Project> {
        self.projects.iter_mut().find(|p| p.name == name)
    }

    /// Whether a project with the given name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[test]
    fn empty_project_is_idle() {
        let project = Project::new("alpha");
        assert!(!project.is_active());
        assert!(project.open_entry().is_none());
    }

    #[test]
    fn open_tail_entry_makes_project_active() {
        let mut project = Project::new("alpha");
        project.logs.push(LogEntry {
            start: utc("2025-01-01T09:00:00Z"),
            end: Some(utc("2025-01-01T09:30:00Z")),
        });
        assert!(!project.is_active());

        project
            .logs
            .push(LogEntry::open_at(utc("2025-01-01T10:00:00Z")));
        assert!(project.is_active());
        assert_eq!(
            project.open_entry().unwrap().start,
            utc("2025-01-01T10:00:00Z")
        );
    }

    #[test]
    fn closed_entry_duration_is_fixed() {
        let entry = LogEntry {
            start: utc("2025-01-01T09:00:00Z"),
            end: Some(utc("2025-01-01T09:30:00Z")),
        };
        // The passed-in instant is irrelevant for closed entries.
        let much_later = utc("2025-06-01T00:00:00Z");
        assert_eq!(entry.duration(much_later), TimeDelta::minutes(30));
    }

    #[test]
    fn open_entry_duration_is_live() {
        let entry = LogEntry::open_at(utc("2025-01-01T09:00:00Z"));
        assert_eq!(
            entry.duration(utc("2025-01-01T09:01:30Z")),
            TimeDelta::seconds(90)
        );
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let data = TrackerData {
            projects: vec![Project::new("Alpha")],
        };
        assert!(data.contains("Alpha"));
        assert!(!data.contains("alpha"));
    }

    #[test]
    fn snapshot_serde_roundtrip() {
        let data = TrackerData {
            projects: vec![
                Project {
                    name: "alpha".to_string(),
                    logs: vec![
                        LogEntry {
                            start: utc("2025-01-01T09:00:00Z"),
                            end: Some(utc("2025-01-01T09:30:00Z")),
                        },
                        LogEntry::open_at(utc("2025-01-01T10:00:00Z")),
                    ],
                    total_time_ms: 1_800_000,
                },
                Project::new("beta"),
            ],
        };

        let json = serde_json::to_string(&data).unwrap();
        let parsed: TrackerData = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, data);
    }

    #[test]
    fn open_entry_serializes_without_end() {
        let entry = LogEntry::open_at(utc("2025-01-01T09:00:00Z"));
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("end"));
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let data: TrackerData = serde_json::from_str(r#"{"projects":[{"name":"alpha"}]}"#).unwrap();
        let project = data.get("alpha").unwrap();
        assert!(project.logs.is_empty());
        assert_eq!(project.total_time_ms, 0);
    }
}
