// routescope/src/core/mod.rs

//! Scope records, the scope stack, and the per-unit attribute store.

pub mod attributes;
pub mod scope;
pub mod stack;
pub mod verb;

// Re-export key types for easier access from other modules (and lib.rs)
pub use attributes::AttributeStore;
pub use scope::{Scope, ScopeOptions};
pub use stack::ScopeStack;
pub use verb::Verb;
