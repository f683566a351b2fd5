//! Generic command version extraction.

use std::process::Command;

/// Get the version of a command by running it with a version flag.
///
/// Checks stdout first and falls back to stderr (several tools print
/// their version there). Returns `None` when the command cannot be run,
/// exits non-zero, or prints nothing.
pub fn get_command_version(cmd: &str, version_flag: &str) -> Option<String> {
    let output = Command::new(cmd).arg(version_flag).output().ok()?;

    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    // Try stdout first, fall back to stderr
    let text = if stdout.trim().is_empty() {
        stderr
    } else {
        stdout
    };

    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(ToString::to_string)
}
