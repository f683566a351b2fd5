#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings; port tests use hand-rolled mocks
#[cfg(test)]
use mockall as _;

pub mod paths;
pub mod ports;
pub mod settings;
pub mod system;

// Re-export primary types for convenient access
pub use paths::{PathError, ResolvedPaths};
pub use ports::{LaunchStages, StageError, SystemProbePort};
pub use settings::{Settings, SettingsError};
pub use system::types::{
    Dependency, DependencyStatus, ElevationOutcome, ElevationState, PipelineOutcome,
    PythonInterpreter, RuntimeStatus,
};
