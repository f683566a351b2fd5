//! Port for the four launch-pipeline stages.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

use crate::system::types::{ElevationOutcome, RuntimeStatus};

/// Error from a pipeline stage, carrying the user-facing explanation.
#[derive(Debug, Error)]
pub enum StageError {
    /// The privilege check or re-launch request failed outright.
    #[error("privilege check failed: {0}")]
    Elevation(String),

    /// The package-manager invocation failed.
    #[error("runtime install failed: {0}")]
    Install(String),

    /// The artifact download failed.
    #[error("artifact download failed: {0}")]
    Fetch(String),

    /// The editor process could not be started.
    #[error("editor launch failed: {0}")]
    Launch(String),
}

/// The four stage operations the launch pipeline sequences.
///
/// The pipeline depends on this trait instead of the OS-facing modules so
/// its gating contract (each stage short-circuits the rest on failure) is
/// testable without elevating, installing, or touching the network.
#[async_trait]
pub trait LaunchStages: Send + Sync {
    /// Stage 1: detect the privilege level and, when the platform supports
    /// it, request the elevated re-launch.
    async fn ensure_elevated(&self) -> Result<ElevationOutcome, StageError>;

    /// Stage 2: force-install the pinned runtime, then probe for it.
    async fn ensure_runtime(&self) -> Result<RuntimeStatus, StageError>;

    /// Stage 3: download the artifact, returning the staged path.
    async fn fetch_artifact(&self) -> Result<PathBuf, StageError>;

    /// Stage 4: spawn the artifact under the verified interpreter,
    /// fire-and-forget.
    async fn launch_editor(&self, interpreter: &str, artifact: &Path) -> Result<(), StageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal implementation proving the trait is object-safe and usable
    /// behind a `dyn` reference.
    struct HappyStages;

    #[async_trait]
    impl LaunchStages for HappyStages {
        async fn ensure_elevated(&self) -> Result<ElevationOutcome, StageError> {
            Ok(ElevationOutcome::Proceed { elevated: true })
        }

        async fn ensure_runtime(&self) -> Result<RuntimeStatus, StageError> {
            Ok(RuntimeStatus::Ready {
                version: "Python 3.14.0".to_string(),
                command: "python".to_string(),
            })
        }

        async fn fetch_artifact(&self) -> Result<PathBuf, StageError> {
            Ok(PathBuf::from("/tmp/hosts_editor.py"))
        }

        async fn launch_editor(
            &self,
            _interpreter: &str,
            _artifact: &Path,
        ) -> Result<(), StageError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn trait_object_dispatch_works() {
        let stages: &dyn LaunchStages = &HappyStages;
        let outcome = stages.ensure_elevated().await.expect("elevation");
        assert_eq!(outcome, ElevationOutcome::Proceed { elevated: true });

        let runtime = stages.ensure_runtime().await.expect("runtime");
        assert!(runtime.is_ready());
    }

    #[test]
    fn stage_errors_render_their_stage() {
        let err = StageError::Fetch("connection refused".to_string());
        assert!(err.to_string().contains("download"));
        assert!(err.to_string().contains("connection refused"));
    }
}
