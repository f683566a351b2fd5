//! System probe implementation for hostsedit-runtime.
//!
//! This module provides the `DefaultSystemProbe` which implements
//! `SystemProbePort` from hostsedit-core by executing real PATH lookups
//! and process spawns.

pub mod commands;

use hostsedit_core::Settings;
use hostsedit_core::ports::SystemProbePort;
use hostsedit_core::system::types::{Dependency, DependencyStatus, PythonInterpreter};
use hostsedit_core::system::version;

use crate::python::{installer, probe};
use commands::get_command_version;

/// Default implementation of `SystemProbePort`.
///
/// Constructed in the CLI bootstrap and passed to handlers that need
/// host-tool information.
pub struct DefaultSystemProbe {
    settings: Settings,
}

impl DefaultSystemProbe {
    /// Create a probe honoring the interpreter override in `settings`.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }
}

impl SystemProbePort for DefaultSystemProbe {
    fn check_all_dependencies(&self) -> Vec<Dependency> {
        check_all_dependencies(&self.settings)
    }

    fn probe_python(&self) -> Option<PythonInterpreter> {
        probe::find_interpreter(self.settings.forced_python())
    }
}

/// Check every host tool the launch pipeline relies on.
pub fn check_all_dependencies(settings: &Settings) -> Vec<Dependency> {
    #[cfg(windows)]
    {
        vec![
            package_manager_dependency(),
            python_dependency(settings),
            powershell_dependency(),
        ]
    }

    #[cfg(not(windows))]
    {
        vec![package_manager_dependency(), python_dependency(settings)]
    }
}

/// The elevation prompt is raised through PowerShell, so its absence is
/// worth surfacing even though the pipeline degrades without it.
#[cfg(windows)]
fn powershell_dependency() -> Dependency {
    Dependency::optional("powershell", "raises the elevation prompt")
        .with_hint("ships with Windows; ensure it is on PATH")
        .with_status(
            which::which("powershell")
                .ok()
                .map(|_| DependencyStatus::Present {
                    version: "available".to_string(),
                })
                .unwrap_or(DependencyStatus::Optional),
        )
}

fn package_manager_dependency() -> Dependency {
    match installer::resolve_installer() {
        Ok(command) => Dependency::required(
            command.program.clone(),
            "installs the pinned Python runtime",
        )
        .with_hint(installer::manual_install_hint())
        .with_status(
            get_command_version(&command.program, "--version")
                .map(|v| DependencyStatus::Present { version: v })
                .unwrap_or(DependencyStatus::Missing),
        ),
        Err(_) => Dependency::required("package manager", "installs the pinned Python runtime")
            .with_hint(installer::manual_install_hint()),
    }
}

fn python_dependency(settings: &Settings) -> Dependency {
    let description = format!(
        "runs the downloaded editor (pinned to {})",
        version::EXPECTED_VERSION_PREFIX
    );
    let dep = Dependency::required("python", description)
        .with_hint(installer::manual_install_hint());

    match probe::find_any_interpreter(settings.forced_python()) {
        Some(python) => dep.with_status(DependencyStatus::Present {
            version: python.version,
        }),
        None => dep,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dependency_table_always_lists_python() {
        let deps = check_all_dependencies(&Settings::with_defaults());
        assert!(deps.iter().any(|d| d.name == "python"));
        assert!(deps.len() >= 2);
    }

    #[test]
    fn python_row_is_required_and_hinted() {
        let deps = check_all_dependencies(&Settings::with_defaults());
        let python = deps
            .iter()
            .find(|d| d.name == "python")
            .expect("python row");
        assert!(python.required);
        assert!(python.install_hint.is_some());
    }

    #[test]
    fn probe_construction_and_dispatch() {
        let probe = DefaultSystemProbe::new(Settings::with_defaults());
        let _deps = probe.check_all_dependencies();
    }
}
