//! Snapshot persistence for ptracker.
//!
//! The full [`TrackerData`] snapshot lives in a single pretty-printed JSON
//! file. Loads and saves are whole-snapshot operations: there is no partial
//! read or write. Saves go through a temporary file in the target directory
//! followed by an atomic rename, so a reader never observes a half-written
//! snapshot even if the process dies mid-save.
//!
//! There is no cross-process locking; two invocations racing on the same
//! file are last-writer-wins.

use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use pt_core::TrackerData;

/// Persistence errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the snapshot file failed.
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot file exists but cannot be parsed into the data model.
    #[error("corrupt tracker data in {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Snapshot store bound to one file path.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Creates a store for the given snapshot file. The file need not exist
    /// yet; it is created on the first [`save`](Self::save).
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The snapshot file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the full snapshot.
    ///
    /// A missing file is a first run, not an error: it yields an empty
    /// snapshot.
    pub fn load(&self) -> Result<TrackerData, StoreError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no snapshot yet, starting empty");
                return Ok(TrackerData::default());
            }
            Err(err) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source: err,
                });
            }
        };

        serde_json::from_slice(&bytes).map_err(|err| StoreError::Corrupt {
            path: self.path.clone(),
            source: err,
        })
    }

    /// Replaces the persisted snapshot atomically.
    pub fn save(&self, data: &TrackerData) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        // The temp file must live in the target directory so the final
        // rename stays on one filesystem.
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(io_err)?;

        let json = serde_json::to_vec_pretty(data).map_err(|err| io_err(err.into()))?;
        tmp.write_all(&json).map_err(io_err)?;
        tmp.flush().map_err(io_err)?;

        tmp.persist(&self.path).map_err(|err| io_err(err.error))?;
        tracing::debug!(path = %self.path.display(), projects = data.projects.len(), "snapshot saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::{DateTime, Utc};
    use pt_core::{LogEntry, Project};

    fn utc(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    fn sample_data() -> TrackerData {
        TrackerData {
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
        }
    }

    #[test]
    fn load_of_missing_file_is_empty_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("data.json"));

        let data = store.load().unwrap();
        assert!(data.projects.is_empty());
    }

    #[test]
    fn save_load_roundtrip_preserves_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("data.json"));

        let data = sample_data();
        store.save(&data).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, data);
    }

    #[test]
    fn save_replaces_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("data.json"));

        store.save(&sample_data()).unwrap();
        store.save(&TrackerData::default()).unwrap();

        let loaded = store.load().unwrap();
        assert!(loaded.projects.is_empty());
    }

    #[test]
    fn save_leaves_no_temp_files_behind() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("data.json"));
        store.save(&sample_data()).unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, ["data.json"]);
    }

    #[test]
    fn malformed_json_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = Store::new(&path).load().unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }

    #[test]
    fn wrong_shape_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, r#"{"projects": [{"logs": []}]}"#).unwrap();

        let err = Store::new(&path).load().unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }
}
