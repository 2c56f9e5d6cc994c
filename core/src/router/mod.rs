// routescope/src/router/mod.rs

//! Whole-unit driving: collecting resolved routes and closing the unit.

pub mod compiled;
pub mod definition;

pub use compiled::CompiledRouter;
pub use definition::{define_router, RouterDefinition};
