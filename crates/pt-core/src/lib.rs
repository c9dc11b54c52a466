//! Core domain logic for ptracker.
//!
//! This crate contains the fundamental types and logic for:
//! - Data model: projects, their session logs, and the full tracker snapshot
//! - Session engine: the open/closed state machine for a project's sessions
//! - Aggregation: effective totals, per-entry stats, and the summary report
//!
//! Every operation takes the snapshot and the current instant as explicit
//! arguments; the crate holds no ambient state and never touches the clock
//! or the filesystem itself.

pub mod clock;
pub mod model;
pub mod session;
pub mod stats;

pub use clock::{Clock, SystemClock};
pub use model::{LogEntry, Project, TrackerData};
pub use session::{SessionError, StopOutcome, create, delete, start, stop};
pub use stats::{ActiveSession, EntryStat, Report, ReportRow, active_sessions, effective_total, entry_stats, report};
