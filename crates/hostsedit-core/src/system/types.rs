//! Host-tool and pipeline state types.

use serde::Serialize;

/// Privilege level of the current process, computed once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElevationState {
    /// Process already holds administrative rights.
    Elevated,
    /// Process is unprivileged and the platform can re-launch it elevated.
    NotElevated,
    /// Process is unprivileged and the platform has no re-launch facility.
    Unsupported,
}

/// Outcome of the elevation stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElevationOutcome {
    /// Continue the pipeline in this process.
    Proceed {
        /// Whether the process holds administrative rights.
        elevated: bool,
    },
    /// The elevation prompt was shown; this process stops here. Whether the
    /// user accepted (elevated copy now owns the session) or declined
    /// (nothing further happens) is deliberately not observed.
    Handoff,
}

/// Result of the post-install runtime probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RuntimeStatus {
    /// Interpreter resolved and its version matches the pinned release line.
    Ready {
        /// Version line reported by the interpreter, e.g. `Python 3.14.0`.
        version: String,
        /// Command name that resolved, e.g. `python`.
        command: String,
    },
    /// Installed (or install attempted) but not usable in this session.
    NotReady {
        /// Human-readable explanation shown to the user.
        reason: String,
    },
}

impl RuntimeStatus {
    /// Whether the fetch and launch stages may run.
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }
}

/// A resolved Python interpreter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PythonInterpreter {
    /// Command name the probe resolved (`python`, `python3`).
    pub command: String,
    /// Full first-line version output, e.g. `Python 3.14.0`.
    pub version: String,
}

/// Where the launch pipeline stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// All four stages ran; the editor was spawned.
    Launched,
    /// The elevation prompt took over; nothing further happens here.
    ElevationHandoff,
    /// Install verification failed, so fetch and launch were skipped.
    RuntimeNotReady {
        /// Explanation from the verification probe.
        reason: String,
    },
}

/// Represents the status of a host tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependencyStatus {
    /// Tool is installed and available.
    Present { version: String },
    /// Tool is missing.
    Missing,
    /// Tool is optional (not required for the launch pipeline).
    Optional,
}

/// Information about a host tool the launcher relies on.
#[derive(Debug, Clone)]
pub struct Dependency {
    /// Name of the tool (e.g., "winget", "python").
    pub name: String,
    /// Current status of the tool.
    pub status: DependencyStatus,
    /// Description of what this tool is used for.
    pub description: String,
    /// Whether this tool is required for the launch pipeline.
    pub required: bool,
    /// Installation instructions or hints.
    pub install_hint: Option<String>,
}

impl Dependency {
    /// Create a new required tool entry.
    pub fn required(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: DependencyStatus::Missing,
            description: description.into(),
            required: true,
            install_hint: None,
        }
    }

    /// Create a new optional tool entry.
    pub fn optional(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: DependencyStatus::Optional,
            description: description.into(),
            required: false,
            install_hint: None,
        }
    }

    /// Set installation hint.
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.install_hint = Some(hint.into());
        self
    }

    /// Set the status of this tool.
    #[must_use]
    pub fn with_status(mut self, status: DependencyStatus) -> Self {
        self.status = status;
        self
    }

    /// Whether this entry blocks the launch pipeline.
    pub fn is_blocking(&self) -> bool {
        self.required && self.status == DependencyStatus::Missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_dependency_starts_missing() {
        let dep = Dependency::required("winget", "installs the pinned runtime");
        assert_eq!(dep.status, DependencyStatus::Missing);
        assert!(dep.required);
        assert!(dep.is_blocking());
    }

    #[test]
    fn builders_chain() {
        let dep = Dependency::optional("powershell", "shows the elevation prompt")
            .with_hint("ships with Windows 10 and later")
            .with_status(DependencyStatus::Present {
                version: "5.1".to_string(),
            });
        assert!(!dep.required);
        assert!(!dep.is_blocking());
        assert_eq!(dep.install_hint.as_deref(), Some("ships with Windows 10 and later"));
    }

    #[test]
    fn ready_status_gates_pipeline() {
        let ready = RuntimeStatus::Ready {
            version: "Python 3.14.0".to_string(),
            command: "python".to_string(),
        };
        let not_ready = RuntimeStatus::NotReady {
            reason: "not on PATH".to_string(),
        };
        assert!(ready.is_ready());
        assert!(!not_ready.is_ready());
    }
}
