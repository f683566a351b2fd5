//! Error types for staging-path resolution.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while resolving or preparing the staging path.
#[derive(Debug, Error)]
pub enum PathError {
    /// The staging directory could not be created.
    #[error("could not create staging directory {path}: {reason}")]
    StagingDirUnavailable { path: PathBuf, reason: String },

    /// The staging directory exists but rejects writes.
    #[error("staging directory {path} is not writable: {reason}")]
    StagingDirNotWritable { path: PathBuf, reason: String },

    /// A staging override pointed at a path that cannot be used.
    #[error("invalid {var} value {value:?}: {reason}")]
    InvalidOverride {
        var: &'static str,
        value: String,
        reason: String,
    },
}
