//! System-facing domain types and version matching.

pub mod types;
pub mod version;

pub use types::{
    Dependency, DependencyStatus, ElevationOutcome, ElevationState, PipelineOutcome,
    PythonInterpreter, RuntimeStatus,
};
