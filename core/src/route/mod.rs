// routescope/src/route/mod.rs

//! Resolves leaf route declarations against the scope stack.

pub mod definition;
pub(crate) mod join;

pub use definition::{Route, RouteOptions};
