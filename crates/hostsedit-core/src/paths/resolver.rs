//! Snapshot of every location the launcher resolves.
//!
//! One struct captures the staging directory, the artifact path, and the
//! artifact URL in a single call, so the `hostsedit paths` command and the
//! tests comparing entry points all see identical resolution.

use std::path::PathBuf;

use super::{PathError, artifact_path_in, staging_dir};
use crate::settings::Settings;

/// All resolved locations captured in one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Directory receiving the downloaded artifact.
    pub staging_dir: PathBuf,
    /// Full path of the staged artifact.
    pub artifact_path: PathBuf,
    /// URL the artifact is fetched from.
    pub artifact_url: String,
}

impl ResolvedPaths {
    /// Resolve using the current environment and the given settings.
    pub fn resolve(settings: &Settings) -> Result<Self, PathError> {
        let staging = staging_dir()?;
        let artifact = artifact_path_in(&staging);
        Ok(Self {
            staging_dir: staging,
            artifact_path: artifact,
            artifact_url: settings.effective_artifact_url().to_string(),
        })
    }
}

impl std::fmt::Display for ResolvedPaths {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "staging_dir = {}", self.staging_dir.display())?;
        writeln!(f, "artifact_path = {}", self.artifact_path.display())?;
        write!(f, "artifact_url = {}", self.artifact_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_is_deterministic() {
        let settings = Settings::with_defaults();
        let first = ResolvedPaths::resolve(&settings).expect("first resolve");
        let second = ResolvedPaths::resolve(&settings).expect("second resolve");
        assert_eq!(first, second, "path resolution should be deterministic");
    }

    #[test]
    fn display_format_is_parseable() {
        let settings = Settings::with_defaults();
        let output = ResolvedPaths::resolve(&settings).expect("resolve").to_string();

        assert!(output.contains("staging_dir = "));
        assert!(output.contains("artifact_path = "));
        assert!(output.contains("artifact_url = "));
    }

    #[test]
    fn url_override_flows_through() {
        let settings = Settings {
            artifact_url: Some("https://example.com/editor.py".to_string()),
            python_command: None,
        };
        let resolved = ResolvedPaths::resolve(&settings).expect("resolve");
        assert_eq!(resolved.artifact_url, "https://example.com/editor.py");
    }
}
