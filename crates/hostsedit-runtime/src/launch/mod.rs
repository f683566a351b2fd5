//! Editor process launch.

use std::io;
use std::path::Path;
use std::process::Command;

use thiserror::Error;
use tracing::info;

/// Errors from the launch stage.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The interpreter command does not resolve in this session.
    #[error("interpreter '{command}' is not resolvable in this session: {reason}")]
    InterpreterNotFound { command: String, reason: String },

    /// The OS refused the spawn.
    #[error("could not start the editor: {0}")]
    SpawnFailed(String),
}

/// Spawn the staged artifact under the given interpreter, fire-and-forget.
///
/// The child inherits this process's privilege level and is not awaited;
/// the launcher's job ends once the editor is running. Returns the child
/// pid.
pub fn spawn_editor(interpreter: &str, artifact: &Path) -> Result<u32, LaunchError> {
    match Command::new(interpreter).arg(artifact).spawn() {
        Ok(child) => {
            let pid = child.id();
            info!(pid, interpreter, artifact = %artifact.display(), "editor spawned");
            Ok(pid)
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            Err(LaunchError::InterpreterNotFound {
                command: interpreter.to_string(),
                reason: err.to_string(),
            })
        }
        Err(err) => Err(LaunchError::SpawnFailed(err.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_interpreter_is_reported_distinctly() {
        let err = spawn_editor(
            "hostsedit-test-no-such-interpreter",
            Path::new("hosts_editor.py"),
        )
        .expect_err("spawn must fail");
        assert!(matches!(err, LaunchError::InterpreterNotFound { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn spawn_does_not_wait_for_the_child() {
        // `true` ignores its argument and exits immediately; spawn must
        // return a pid without waiting for that exit.
        let pid = spawn_editor("true", Path::new("hosts_editor.py")).expect("spawn");
        assert!(pid > 0);
    }
}
