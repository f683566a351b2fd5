//! Check host tools handler.
//!
//! Displays the tools the launch pipeline relies on in a formatted,
//! user-friendly table.

use hostsedit_core::ports::SystemProbePort;
use hostsedit_core::system::types::{Dependency, DependencyStatus};

use crate::error::CliError;

// ANSI color codes for better UX
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const BLUE: &str = "\x1b[34m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Execute the check-deps command.
///
/// Returns an error when any required tool is missing, so scripts can
/// gate on the exit code.
pub fn execute(probe: &dyn SystemProbePort) -> Result<(), CliError> {
    println!("{BOLD}{BLUE}Checking host tools...{RESET}\n");

    let dependencies = probe.check_all_dependencies();

    println!("{BOLD}{:<20} {:<24} NOTES{RESET}", "TOOL", "STATUS");
    println!("{}", "=".repeat(80));

    for dep in &dependencies {
        print_dependency(dep);
    }

    println!("{}", "=".repeat(80));

    let missing: Vec<&Dependency> = dependencies.iter().filter(|d| d.is_blocking()).collect();
    if missing.is_empty() {
        println!("{GREEN}✓ All required tools are available{RESET}");
        return Ok(());
    }

    println!("{RED}✗ {} required tool(s) missing{RESET}", missing.len());
    println!();
    for dep in &missing {
        if let Some(hint) = &dep.install_hint {
            println!("  {}: {hint}", dep.name);
        }
    }
    Err(CliError::Runtime("missing required host tools".to_string()))
}

/// Print a single tool row in the status table.
fn print_dependency(dep: &Dependency) {
    let status_str = match &dep.status {
        DependencyStatus::Present { version } => {
            if version.is_empty() {
                format!("{GREEN}✓ installed{RESET}")
            } else {
                format!("{GREEN}✓ {version}{RESET}")
            }
        }
        DependencyStatus::Missing => {
            if dep.required {
                format!("{RED}✗ missing{RESET}")
            } else {
                format!("{YELLOW}○ missing{RESET}")
            }
        }
        DependencyStatus::Optional => format!("{YELLOW}○ optional{RESET}"),
    };

    let req_indicator = if dep.required {
        format!("{RED}*{RESET}")
    } else {
        " ".to_string()
    };

    println!(
        "{}{:<19} {:<33} {}",
        req_indicator, dep.name, status_str, dep.description
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostsedit_core::system::types::PythonInterpreter;

    struct FixedProbe {
        deps: Vec<Dependency>,
    }

    impl SystemProbePort for FixedProbe {
        fn check_all_dependencies(&self) -> Vec<Dependency> {
            self.deps.clone()
        }

        fn probe_python(&self) -> Option<PythonInterpreter> {
            None
        }
    }

    #[test]
    fn all_present_exits_cleanly() {
        let probe = FixedProbe {
            deps: vec![
                Dependency::required("winget", "installs the runtime").with_status(
                    DependencyStatus::Present {
                        version: "1.8".to_string(),
                    },
                ),
            ],
        };
        assert!(execute(&probe).is_ok());
    }

    #[test]
    fn missing_required_tool_is_an_error() {
        let probe = FixedProbe {
            deps: vec![Dependency::required("winget", "installs the runtime")],
        };
        let err = execute(&probe).expect_err("missing tool");
        assert!(matches!(err, CliError::Runtime(_)));
    }

    #[test]
    fn missing_optional_tool_is_not_an_error() {
        let probe = FixedProbe {
            deps: vec![
                Dependency::required("brew", "installs the runtime").with_status(
                    DependencyStatus::Present {
                        version: String::new(),
                    },
                ),
                Dependency::optional("powershell", "raises the elevation prompt"),
            ],
        };
        assert!(execute(&probe).is_ok());
    }
}
