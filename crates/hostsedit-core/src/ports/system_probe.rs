//! System probe port for host-tool and interpreter detection.
//!
//! This port abstracts active system probing (command execution, PATH
//! lookups) from the core domain. Implementations live in adapters
//! (e.g., hostsedit-runtime).
//!
//! # Design Notes
//!
//! - Core owns the trait and types (pure)
//! - Runtime owns the implementation (active probing via `Command::new`)
//! - CLI injects the probe via its bootstrap module

use crate::system::types::{Dependency, PythonInterpreter};

/// Port for probing host tools and the pinned interpreter.
///
/// Implementations perform active probing by executing commands and
/// resolving binaries on PATH. The core domain uses this trait to remain
/// pure and testable.
pub trait SystemProbePort: Send + Sync {
    /// Check every host tool the launcher relies on.
    ///
    /// Returns a list of tools with their installation status, version
    /// information where available, and hints for installation.
    fn check_all_dependencies(&self) -> Vec<Dependency>;

    /// Resolve the pinned Python interpreter, if visible in this session.
    ///
    /// Returns `None` both when no interpreter resolves and when one
    /// resolves with the wrong release line.
    fn probe_python(&self) -> Option<PythonInterpreter>;
}
