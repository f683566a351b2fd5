//! Port traits decoupling the pipeline and CLI from OS-facing code.
//!
//! Core owns the traits; `hostsedit-runtime` owns the implementations; the
//! CLI bootstrap module wires them together.

mod launch_stages;
mod system_probe;

pub use launch_stages::{LaunchStages, StageError};
pub use system_probe::SystemProbePort;
