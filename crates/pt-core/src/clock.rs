//! Clock abstraction.
//!
//! The core never reads the system time itself; callers sample a [`Clock`]
//! once per invocation and pass the instant into every operation. Tests use
//! fixed instants instead of implementing the trait.

use chrono::{DateTime, Utc};

/// Supplies the current instant in UTC.
pub trait Clock {
    /// The current instant. Non-decreasing within one process invocation
    /// for any sane wall clock; backward jumps are a documented edge case
    /// handled by the session engine.
    fn now(&self) -> DateTime<Utc>;
}

/// System wall clock in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
