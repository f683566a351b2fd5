//! Main commands enum and primary subcommands.
//!
//! This module defines the available commands for the launcher CLI.

use clap::Subcommand;

use crate::python_commands::PythonCommand;

/// Available commands for the hosts-editor launcher.
///
/// Running the binary with no command executes the full launch pipeline;
/// these subcommands expose its stages individually.
#[derive(Subcommand)]
pub enum Commands {
    /// Run the full launch pipeline (the default when no command is given)
    Launch,

    /// Download the editor artifact to the staging path and stop
    Fetch {
        /// Override the artifact URL for this invocation
        #[arg(long)]
        url: Option<String>,
    },

    /// Manage the pinned Python runtime
    Python {
        #[command(subcommand)]
        command: PythonCommand,
    },

    /// Show launcher status: privileges, runtime, staged artifact
    Status {
        /// Emit machine-readable JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Check host tools the launch pipeline relies on
    CheckDeps,

    /// Show resolved staging paths and the effective artifact URL
    Paths,
}
