//! Status command handler.
//!
//! Gathers the launcher's observable state without changing anything:
//! no install, no download, no spawn.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use hostsedit_core::ResolvedPaths;
use hostsedit_core::system::types::{ElevationState, RuntimeStatus};
use hostsedit_runtime::elevation::current_state;
use hostsedit_runtime::python::verify_runtime;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Snapshot of everything `hostsedit status` reports.
#[derive(Debug, Serialize)]
pub struct StatusReport {
    /// Privilege level of this process.
    pub elevation: ElevationState,
    /// Verification result for the pinned runtime.
    pub runtime: RuntimeStatus,
    /// Staged artifact, if any.
    pub artifact: ArtifactReport,
    /// Effective artifact URL.
    pub artifact_url: String,
}

/// Staged-artifact details.
#[derive(Debug, Serialize)]
pub struct ArtifactReport {
    /// Path the fetch stage writes to.
    pub path: PathBuf,
    /// Whether a staged copy exists at that path.
    pub staged: bool,
    /// Size of the staged copy in bytes.
    pub size_bytes: Option<u64>,
}

/// Execute the status command.
pub fn execute(ctx: &CliContext, json: bool) -> Result<(), CliError> {
    let paths = ResolvedPaths::resolve(ctx.settings())?;

    let report = StatusReport {
        elevation: current_state(),
        runtime: verify_runtime(ctx.settings()),
        artifact: inspect_artifact(&paths.artifact_path),
        artifact_url: paths.artifact_url,
    };

    if json {
        let rendered = serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?;
        println!("{rendered}");
        return Ok(());
    }

    print_human(&report);
    Ok(())
}

fn inspect_artifact(path: &Path) -> ArtifactReport {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => ArtifactReport {
            path: path.to_path_buf(),
            staged: true,
            size_bytes: Some(meta.len()),
        },
        _ => ArtifactReport {
            path: path.to_path_buf(),
            staged: false,
            size_bytes: None,
        },
    }
}

fn print_human(report: &StatusReport) {
    println!("Privileges: {}", elevation_label(report.elevation));

    match &report.runtime {
        RuntimeStatus::Ready { version, command } => {
            println!("Runtime: ✓ {version} via '{command}'");
        }
        RuntimeStatus::NotReady { reason } => {
            println!("Runtime: ✗ {reason}");
        }
    }

    if report.artifact.staged {
        println!(
            "Artifact: ✓ {} ({} bytes)",
            report.artifact.path.display(),
            report.artifact.size_bytes.unwrap_or(0)
        );
    } else {
        println!("Artifact: ○ not staged at {}", report.artifact.path.display());
    }

    println!("Source: {}", report.artifact_url);
}

const fn elevation_label(state: ElevationState) -> &'static str {
    match state {
        ElevationState::Elevated => "administrative",
        ElevationState::NotElevated => "standard (elevation available)",
        ElevationState::Unsupported => "standard",
    }
}
