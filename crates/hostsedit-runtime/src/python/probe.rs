//! Interpreter discovery and version probing.

use tracing::debug;
use which::which;

use hostsedit_core::system::types::PythonInterpreter;
use hostsedit_core::system::version;

use crate::system::commands::get_command_version;

/// Interpreter commands tried in order.
#[cfg(windows)]
pub const PYTHON_CANDIDATES: &[&str] = &["python"];

/// Interpreter commands tried in order.
#[cfg(not(windows))]
pub const PYTHON_CANDIDATES: &[&str] = &["python3", "python"];

/// Probe one command, keeping it only if it reports the pinned release.
pub fn probe_command(command: &str) -> Option<PythonInterpreter> {
    let interpreter = probe_command_any(command)?;
    if version::matches_pinned_release(&interpreter.version) {
        Some(interpreter)
    } else {
        debug!(
            command,
            version = %interpreter.version,
            "interpreter present but not the pinned release"
        );
        None
    }
}

/// Probe one command for any Python at all.
pub fn probe_command_any(command: &str) -> Option<PythonInterpreter> {
    which(command).ok()?;
    let version = get_command_version(command, "--version")?;
    Some(PythonInterpreter {
        command: command.to_string(),
        version,
    })
}

/// Find the pinned interpreter among the platform candidates.
///
/// A forced command (from `--python` or its environment variable) replaces
/// the candidate list entirely.
pub fn find_interpreter(forced: Option<&str>) -> Option<PythonInterpreter> {
    match forced {
        Some(command) => probe_command(command),
        None => PYTHON_CANDIDATES.iter().find_map(|c| probe_command(c)),
    }
}

/// Find any interpreter among the candidates, regardless of release line.
pub fn find_any_interpreter(forced: Option<&str>) -> Option<PythonInterpreter> {
    match forced {
        Some(command) => probe_command_any(command),
        None => PYTHON_CANDIDATES.iter().find_map(|c| probe_command_any(c)),
    }
}
