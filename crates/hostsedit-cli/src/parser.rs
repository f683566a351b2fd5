//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface definition for the hosts-editor launcher.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands. With no subcommand the full launch pipeline runs.
#[derive(Parser)]
#[command(name = "hostsedit")]
#[command(about = "Fetch and launch the hosts editor with its pinned Python runtime")]
#[command(version)]
pub struct Cli {
    /// Answer yes to every acknowledgment prompt
    #[arg(short = 'y', long = "yes", global = true)]
    pub yes: bool,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Force a specific Python interpreter command
    #[arg(long = "python", global = true, env = "HOSTSEDIT_PYTHON")]
    pub python: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_args_parse_before_a_subcommand() {
        let cli = Cli::parse_from(["hostsedit", "--yes", "--python", "python3.14", "status"]);
        assert!(cli.yes);
        assert_eq!(cli.python, Some("python3.14".to_string()));
    }

    #[test]
    fn no_subcommand_means_launch() {
        let cli = Cli::parse_from(["hostsedit"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn python_env_var_matches_the_settings_constant() {
        // The parser attribute needs a literal; keep it in lockstep with
        // the constant the rest of the workspace documents.
        assert_eq!("HOSTSEDIT_PYTHON", hostsedit_core::settings::PYTHON_ENV);
    }
}
