//! Pinned-runtime management subcommands.

use clap::Subcommand;

/// Python runtime management commands.
#[derive(Subcommand)]
pub enum PythonCommand {
    /// Force-install the pinned runtime, then verify it
    Install,

    /// Verify the pinned runtime without installing anything
    Status,
}
