//! Package-manager invocations for the pinned Python runtime.
//!
//! Every resolved invocation forces reinstallation and suppresses
//! interactive prompts, so it can run unattended no matter what is
//! already on the machine. A zero exit proves nothing about usability;
//! the caller's probe decides that.

use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, info};

/// winget package id of the pinned runtime.
pub const WINGET_PACKAGE_ID: &str = "Python.Python.3.14";

/// Homebrew formula of the pinned runtime.
pub const BREW_FORMULA: &str = "python@3.14";

/// Errors from the install invocation.
#[derive(Debug, Error)]
pub enum InstallError {
    /// No supported package manager exists on this host.
    #[error("no supported package manager was found on this system")]
    NoPackageManager,

    /// The package manager could not be run, or reported failure.
    #[error("could not run {manager}: {reason}")]
    InvocationFailed { manager: String, reason: String },
}

/// A resolved package-manager invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallerCommand {
    /// Package-manager binary.
    pub program: String,
    /// Full argument list, silent and auto-accepting.
    pub args: Vec<String>,
}

impl InstallerCommand {
    fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(ToString::to_string).collect(),
        }
    }

    /// Human-readable rendering for logs and status output.
    pub fn rendered(&self) -> String {
        format!("{} {}", self.program, self.args.join(" "))
    }
}

/// Resolve the package-manager invocation for this platform.
#[cfg(target_os = "windows")]
pub fn resolve_installer() -> Result<InstallerCommand, InstallError> {
    // winget ships with Windows 10 and later; if it is missing anyway the
    // invocation itself reports the failure.
    Ok(InstallerCommand::new(
        "winget",
        &[
            "install",
            "--id",
            WINGET_PACKAGE_ID,
            "--force",
            "--silent",
            "--accept-package-agreements",
            "--accept-source-agreements",
        ],
    ))
}

/// Resolve the package-manager invocation for this platform.
#[cfg(target_os = "macos")]
pub fn resolve_installer() -> Result<InstallerCommand, InstallError> {
    if which::which("brew").is_err() {
        return Err(InstallError::NoPackageManager);
    }
    Ok(InstallerCommand::new(
        "brew",
        &["install", "--force", "--quiet", BREW_FORMULA],
    ))
}

/// Resolve the package-manager invocation for this platform.
#[cfg(all(unix, not(target_os = "macos")))]
pub fn resolve_installer() -> Result<InstallerCommand, InstallError> {
    // Distro repositories pin their own Python line, so the pinned release
    // may still be absent afterwards; the verification probe catches that.
    if which::which("apt-get").is_ok() {
        return Ok(InstallerCommand::new(
            "apt-get",
            &["install", "-y", "-qq", "--reinstall", "python3"],
        ));
    }
    if which::which("dnf").is_ok() {
        return Ok(InstallerCommand::new(
            "dnf",
            &["install", "-y", "-q", "python3"],
        ));
    }
    Err(InstallError::NoPackageManager)
}

/// Invoke the resolved package manager and wait for it to finish.
///
/// Output stays attached to the console so the manager's own progress is
/// visible.
pub async fn run_installer(command: &InstallerCommand) -> Result<(), InstallError> {
    info!(command = %command.rendered(), "installing the pinned Python runtime");

    let status = Command::new(&command.program)
        .args(&command.args)
        .status()
        .await
        .map_err(|e| InstallError::InvocationFailed {
            manager: command.program.clone(),
            reason: e.to_string(),
        })?;

    if !status.success() {
        return Err(InstallError::InvocationFailed {
            manager: command.program.clone(),
            reason: format!("exited with {status}"),
        });
    }

    debug!("package manager invocation completed");
    Ok(())
}

/// Manual installation guidance for when the unattended path fails.
pub fn manual_install_hint() -> String {
    #[cfg(target_os = "windows")]
    {
        format!(
            "install Python 3.14 with 'winget install --id {WINGET_PACKAGE_ID}' or from https://www.python.org/downloads/"
        )
    }

    #[cfg(target_os = "macos")]
    {
        format!(
            "install Python 3.14 with 'brew install {BREW_FORMULA}' or from https://www.python.org/downloads/"
        )
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    {
        "install Python 3.14 with your distribution's package manager or from https://www.python.org/downloads/"
            .to_string()
    }
}
