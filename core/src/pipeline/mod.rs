// routescope/src/pipeline/mod.rs

//! Named middleware pipelines: declaration and validation. Pipelines are only referenced
//! by name here, never executed.

pub mod registry;

pub use registry::PipelineRegistry;
