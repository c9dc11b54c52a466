//! Personal time tracker CLI library.
//!
//! This crate provides the command-line interface for ptracker. All domain
//! logic lives in `pt-core`; persistence lives in `pt-store`. The commands
//! here load the snapshot, call into the core with the current instant, and
//! render one-line messages or tables.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands};
pub use config::Config;
