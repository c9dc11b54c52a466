//! CLI subcommand implementations.

pub mod create;
pub mod delete;
pub mod list;
pub mod report;
pub mod start;
pub mod stats;
pub mod status;
pub mod stop;

use chrono::TimeDelta;

/// Duration in fractional minutes, the unit every command displays.
#[expect(
    clippy::cast_precision_loss,
    reason = "session durations fit f64 comfortably"
)]
pub(crate) fn minutes(duration: TimeDelta) -> f64 {
    duration.num_milliseconds() as f64 / 60_000.0
}
