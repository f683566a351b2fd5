//! Staging-path resolution for the downloaded editor script.
//!
//! The launcher writes exactly one file: the fetched artifact, staged in
//! the OS temporary directory. `HOSTSEDIT_TEMP_DIR` redirects staging for
//! tests and packaging; each run overwrites the same path, so nothing
//! accumulates.

mod error;
mod resolver;

pub use error::PathError;
pub use resolver::ResolvedPaths;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the staged editor script.
pub const ARTIFACT_FILE_NAME: &str = "hosts_editor.py";

/// Environment variable overriding the staging directory.
pub const TEMP_DIR_ENV: &str = "HOSTSEDIT_TEMP_DIR";

/// Resolve the staging directory.
///
/// Order: `HOSTSEDIT_TEMP_DIR` override, then the OS temporary directory.
/// The directory is created when missing so later stages can rely on it.
pub fn staging_dir() -> Result<PathBuf, PathError> {
    let dir = match env::var(TEMP_DIR_ENV) {
        Ok(value) if !value.trim().is_empty() => {
            let path = PathBuf::from(value.trim());
            if path.is_relative() {
                return Err(PathError::InvalidOverride {
                    var: TEMP_DIR_ENV,
                    value: path.display().to_string(),
                    reason: "staging override must be an absolute path".to_string(),
                });
            }
            path
        }
        _ => env::temp_dir(),
    };
    ensure_dir(&dir)?;
    Ok(dir)
}

/// Full path the downloaded artifact is written to.
pub fn artifact_path() -> Result<PathBuf, PathError> {
    Ok(staging_dir()?.join(ARTIFACT_FILE_NAME))
}

/// Artifact path inside an explicit staging directory.
///
/// Pure variant of [`artifact_path`] for callers that already resolved the
/// directory (tests, the `paths` command).
pub fn artifact_path_in(staging: &Path) -> PathBuf {
    staging.join(ARTIFACT_FILE_NAME)
}

/// Confirm a directory accepts writes by round-tripping a probe file.
pub fn verify_writable(dir: &Path) -> Result<(), PathError> {
    let probe = dir.join(".hostsedit_write_probe");
    fs::write(&probe, b"probe").map_err(|e| PathError::StagingDirNotWritable {
        path: dir.to_path_buf(),
        reason: e.to_string(),
    })?;
    let _ = fs::remove_file(&probe);
    Ok(())
}

fn ensure_dir(dir: &Path) -> Result<(), PathError> {
    fs::create_dir_all(dir).map_err(|e| PathError::StagingDirUnavailable {
        path: dir.to_path_buf(),
        reason: e.to_string(),
    })
}
