#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unsafe_code)]

pub mod elevation;
pub mod fetch;
pub mod launch;
pub mod pipeline;
pub mod python;
pub mod system;

// Re-export the pipeline entry point and its production stage set
pub use pipeline::{DefaultStages, run_launch};

// Re-export system probe implementation
pub use system::DefaultSystemProbe;
