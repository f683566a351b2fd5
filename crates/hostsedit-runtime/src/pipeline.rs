//! The launch pipeline: elevate, ensure the runtime, fetch, launch.
//!
//! Strict sequential gating is the launcher's one structural guarantee.
//! A handoff stops everything; a runtime that is not ready stops fetch
//! and launch; a failed fetch stops launch. No stage retries.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, info};

use hostsedit_core::Settings;
use hostsedit_core::paths;
use hostsedit_core::ports::{LaunchStages, StageError};
use hostsedit_core::system::types::{ElevationOutcome, PipelineOutcome, RuntimeStatus};

/// Run the four stages in order with strict short-circuiting.
pub async fn run_launch(stages: &dyn LaunchStages) -> Result<PipelineOutcome, StageError> {
    match stages.ensure_elevated().await? {
        ElevationOutcome::Handoff => {
            debug!("elevation prompt raised, stopping in this process");
            return Ok(PipelineOutcome::ElevationHandoff);
        }
        ElevationOutcome::Proceed { elevated } => {
            debug!(elevated, "continuing in this process");
        }
    }

    let interpreter = match stages.ensure_runtime().await? {
        RuntimeStatus::Ready { version, command } => {
            info!(%version, %command, "runtime verified");
            command
        }
        RuntimeStatus::NotReady { reason } => {
            return Ok(PipelineOutcome::RuntimeNotReady { reason });
        }
    };

    let artifact = stages.fetch_artifact().await?;
    stages.launch_editor(&interpreter, &artifact).await?;
    Ok(PipelineOutcome::Launched)
}

/// Stage implementations backed by the real OS-facing modules.
pub struct DefaultStages {
    settings: Settings,
}

impl DefaultStages {
    /// Build the production stage set over the given settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl LaunchStages for DefaultStages {
    async fn ensure_elevated(&self) -> Result<ElevationOutcome, StageError> {
        Ok(crate::elevation::ensure_elevated())
    }

    async fn ensure_runtime(&self) -> Result<RuntimeStatus, StageError> {
        crate::python::ensure_runtime(&self.settings)
            .await
            .map_err(|e| StageError::Install(format!("{e:#}")))
    }

    async fn fetch_artifact(&self) -> Result<PathBuf, StageError> {
        let staging = paths::staging_dir().map_err(|e| StageError::Fetch(e.to_string()))?;
        paths::verify_writable(&staging).map_err(|e| StageError::Fetch(e.to_string()))?;

        let dest = paths::artifact_path_in(&staging);
        crate::fetch::download_artifact(self.settings.effective_artifact_url(), &dest)
            .await
            .map_err(|e| StageError::Fetch(e.to_string()))?;
        Ok(dest)
    }

    async fn launch_editor(&self, interpreter: &str, artifact: &Path) -> Result<(), StageError> {
        crate::launch::spawn_editor(interpreter, artifact)
            .map(|_pid| ())
            .map_err(|e| StageError::Launch(e.to_string()))
    }
}
