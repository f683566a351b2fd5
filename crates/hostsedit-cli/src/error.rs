//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and the mappings
//! from stage and domain errors to exit codes.

use hostsedit_core::{PathError, SettingsError, StageError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument parsing or validation error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Configuration error (bad override values, unusable staging dir).
    #[error("Configuration error: {0}")]
    Config(String),

    /// The pinned runtime could not be installed or verified.
    #[error("Runtime error: {0}")]
    Runtime(String),

    /// The artifact download failed.
    #[error("Download error: {0}")]
    Download(String),

    /// Process execution error (elevation request, editor spawn).
    #[error("Process error: {0}")]
    Process(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Anything without a more specific category.
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Arguments(_) => 2, // EX_USAGE
            CliError::Config(_) => 78,   // EX_CONFIG
            CliError::Runtime(_) => 69,  // EX_UNAVAILABLE
            CliError::Download(_) => 74, // EX_IOERR
            CliError::Process(_) => 71,  // EX_OSERR
            CliError::Io(_) => 74,       // EX_IOERR
            CliError::Other(_) => 1,
        }
    }
}

impl From<StageError> for CliError {
    fn from(err: StageError) -> Self {
        match err {
            StageError::Elevation(msg) => CliError::Process(msg),
            StageError::Install(msg) => CliError::Runtime(msg),
            StageError::Fetch(msg) => CliError::Download(msg),
            StageError::Launch(msg) => CliError::Process(msg),
        }
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        CliError::Config(err.to_string())
    }
}

impl From<SettingsError> for CliError {
    fn from(err: SettingsError) -> Self {
        CliError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_separate_failure_classes() {
        assert_eq!(CliError::Arguments("bad".into()).exit_code(), 2);
        assert_eq!(CliError::Config("bad".into()).exit_code(), 78);
        assert_eq!(CliError::Runtime("bad".into()).exit_code(), 69);
        assert_eq!(CliError::Download("bad".into()).exit_code(), 74);
        assert_eq!(CliError::Process("bad".into()).exit_code(), 71);
    }

    #[test]
    fn stage_errors_map_onto_their_exit_class() {
        let fetch: CliError = StageError::Fetch("refused".into()).into();
        assert!(matches!(fetch, CliError::Download(_)));

        let install: CliError = StageError::Install("no manager".into()).into();
        assert!(matches!(install, CliError::Runtime(_)));

        let launch: CliError = StageError::Launch("no interpreter".into()).into();
        assert!(matches!(launch, CliError::Process(_)));
    }
}
