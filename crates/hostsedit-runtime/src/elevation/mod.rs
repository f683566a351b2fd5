//! Privilege detection and elevated re-launch.
//!
//! Windows detection shells out to `net session`, which only succeeds in
//! an elevated console; the re-launch goes through PowerShell's
//! `Start-Process -Verb RunAs`, which raises the UAC prompt for a fresh
//! copy of this executable carrying the original arguments. Unix has no
//! equivalent prompt, so detection checks the effective uid and the
//! pipeline continues unprivileged when not root.

#[cfg(windows)]
use std::env;
#[cfg(windows)]
use std::process::{Command, Stdio};

use thiserror::Error;
use tracing::{debug, warn};

use hostsedit_core::system::types::{ElevationOutcome, ElevationState};

/// Errors raised while requesting an elevated re-launch.
#[derive(Debug, Error)]
pub enum ElevationError {
    /// The re-launch could not be requested at all.
    #[error("could not request an elevated re-launch: {0}")]
    RelaunchUnavailable(String),
}

/// Detect the privilege level of the current process.
#[cfg(windows)]
pub fn current_state() -> ElevationState {
    // `net session` requires administrative rights; its exit status stands
    // in for an access-token query.
    let elevated = Command::new("net")
        .args(["session"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false);

    if elevated {
        ElevationState::Elevated
    } else {
        ElevationState::NotElevated
    }
}

/// Detect the privilege level of the current process.
#[cfg(unix)]
pub fn current_state() -> ElevationState {
    if nix::unistd::geteuid().is_root() {
        ElevationState::Elevated
    } else {
        // No UAC-style prompt exists here, so there is nothing to re-launch
        // through.
        ElevationState::Unsupported
    }
}

/// Run the elevation stage.
///
/// `Handoff` means the elevation prompt was raised for a copy of this
/// executable and the caller must stop without running any later stage.
/// On platforms without a re-launch facility the pipeline keeps going
/// unprivileged.
pub fn ensure_elevated() -> ElevationOutcome {
    match current_state() {
        ElevationState::Elevated => {
            debug!("process already holds administrative rights");
            ElevationOutcome::Proceed { elevated: true }
        }
        ElevationState::Unsupported => {
            warn!("no elevated re-launch facility on this platform, continuing unprivileged");
            ElevationOutcome::Proceed { elevated: false }
        }
        ElevationState::NotElevated => match request_relaunch() {
            Ok(()) => ElevationOutcome::Handoff,
            Err(err) => {
                warn!("elevated re-launch unavailable ({err}), continuing unprivileged");
                ElevationOutcome::Proceed { elevated: false }
            }
        },
    }
}

/// Raise the elevation prompt for a fresh copy of this executable.
///
/// Returns `Ok` once PowerShell has run, whether the user accepted the
/// prompt or dismissed it; either way this process's part is over. `Err`
/// means the request itself could not be issued.
#[cfg(windows)]
fn request_relaunch() -> Result<(), ElevationError> {
    let exe = env::current_exe().map_err(|e| ElevationError::RelaunchUnavailable(e.to_string()))?;
    let args: Vec<String> = env::args().skip(1).collect();

    let mut start = format!(
        "Start-Process -FilePath '{}' -Verb RunAs",
        exe.display().to_string().replace('\'', "''")
    );
    if !args.is_empty() {
        start.push_str(" -ArgumentList ");
        start.push_str(&powershell_argument_list(&args));
    }

    let status = Command::new("powershell")
        .args(["-NoProfile", "-Command", &start])
        .status()
        .map_err(|e| ElevationError::RelaunchUnavailable(e.to_string()))?;

    if status.success() {
        debug!("elevated re-launch requested");
    } else {
        debug!("elevation prompt dismissed");
    }
    Ok(())
}

#[cfg(not(windows))]
fn request_relaunch() -> Result<(), ElevationError> {
    Err(ElevationError::RelaunchUnavailable(
        "no elevation facility on this platform".to_string(),
    ))
}

/// Render arguments as a PowerShell `-ArgumentList` literal.
///
/// Each argument becomes a single-quoted PowerShell string with embedded
/// single quotes doubled, the whole list comma-separated.
#[cfg_attr(not(windows), allow(dead_code))]
fn powershell_argument_list(args: &[String]) -> String {
    args.iter()
        .map(|arg| format!("'{}'", arg.replace('\'', "''")))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argument_list_quotes_each_argument() {
        let args = vec!["fetch".to_string(), "--url".to_string()];
        assert_eq!(powershell_argument_list(&args), "'fetch','--url'");
    }

    #[test]
    fn argument_list_doubles_embedded_quotes() {
        let args = vec!["it's".to_string()];
        assert_eq!(powershell_argument_list(&args), "'it''s'");
    }

    #[cfg(unix)]
    #[test]
    fn unix_detection_never_reports_a_relaunch_path() {
        // Root reads as Elevated, everyone else as Unsupported; NotElevated
        // is a Windows-only state.
        assert_ne!(current_state(), ElevationState::NotElevated);
    }

    #[cfg(unix)]
    #[test]
    fn unix_stage_always_proceeds_in_process() {
        match ensure_elevated() {
            ElevationOutcome::Proceed { .. } => {}
            ElevationOutcome::Handoff => panic!("no prompt exists to hand off to"),
        }
    }
}
