//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Personal time tracker.
///
/// Records start/stop sessions for named projects and derives per-project
/// and aggregate statistics. Time is recorded in UTC; multiple projects can
/// have active sessions simultaneously.
#[derive(Debug, Parser)]
#[command(name = "ptracker", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new project.
    Create {
        /// Project name (unique, case-sensitive).
        name: String,
    },

    /// Delete a project and all its logs.
    Delete {
        /// Project name.
        name: String,

        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },

    /// Start tracking time on a project.
    Start {
        /// Project name.
        name: String,
    },

    /// Stop tracking the specified project.
    Stop {
        /// Project name.
        name: String,
    },

    /// Show active tracking sessions.
    Status,

    /// View the time log for a project.
    Stats {
        /// Project name.
        name: String,
    },

    /// Show a summary of total time spent across all projects.
    Report {
        /// Output as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// List all tracked projects.
    List,
}
