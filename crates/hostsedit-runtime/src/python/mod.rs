//! The pinned Python runtime: unattended install plus verification probe.
//!
//! The install always runs with force-reinstall semantics and the probe is
//! the only success gate. Package managers regularly leave a fresh
//! interpreter invisible to the running session because PATH was captured
//! before the install, so "installed" and "usable right now" are kept as
//! separate questions.

pub mod installer;
pub mod probe;

use anyhow::{Context, Result};

use hostsedit_core::Settings;
use hostsedit_core::system::types::RuntimeStatus;
use hostsedit_core::system::version;

pub use installer::{InstallError, InstallerCommand};

/// Force-install the pinned runtime, then probe for it.
///
/// Install-invocation failures are hard errors; a completed install that
/// the probe still cannot see comes back as `RuntimeStatus::NotReady`.
pub async fn ensure_runtime(settings: &Settings) -> Result<RuntimeStatus> {
    let command = installer::resolve_installer().with_context(|| {
        format!(
            "cannot install automatically; {}",
            installer::manual_install_hint()
        )
    })?;

    println!("Installing the pinned Python runtime...");
    println!("  {}", command.rendered());
    installer::run_installer(&command).await.with_context(|| {
        format!(
            "package manager invocation failed; {}",
            installer::manual_install_hint()
        )
    })?;

    Ok(verify_runtime(settings))
}

/// Probe for the pinned runtime without installing anything.
pub fn verify_runtime(settings: &Settings) -> RuntimeStatus {
    if let Some(python) = probe::find_interpreter(settings.forced_python()) {
        return RuntimeStatus::Ready {
            version: python.version,
            command: python.command,
        };
    }

    let reason = match probe::find_any_interpreter(settings.forced_python()) {
        Some(other) => format!(
            "found {} ({}), but {} is required",
            other.command,
            other.version,
            version::EXPECTED_VERSION_PREFIX
        ),
        None => {
            "no Python interpreter is visible in this session; PATH changes from a fresh install need a new terminal"
                .to_string()
        }
    };
    RuntimeStatus::NotReady { reason }
}
