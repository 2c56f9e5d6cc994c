// src/lib.rs

//! routescope: build-time scope resolution for nested route declarations.
//!
//! A declaration front end nests scopes, each contributing some of:
//!  - a path prefix,
//!  - a namespace that qualifies controller references,
//!  - a name fragment for route naming,
//!  - pipelines enabled through `pipe_through`,
//!  - a host constraint.
//!
//! For every leaf route declared inside that nesting, the stack of enclosing scopes is
//! joined into one flat `Route` record.

pub mod config;
pub mod context;
pub mod core;
pub mod error;
pub mod naming;
pub mod pipeline;
pub mod route;
pub mod router;

// --- Re-exports for the Public API ---

pub use crate::config::ScopeConfig;
pub use crate::context::ScopeContext;
pub use crate::core::{AttributeStore, Scope, ScopeOptions, ScopeStack, Verb};
pub use crate::error::{ScopeError, ScopeResult};
pub use crate::naming::{Conventions, DefaultConventions};
pub use crate::pipeline::PipelineRegistry;
pub use crate::route::{Route, RouteOptions};
pub use crate::router::{define_router, CompiledRouter, RouterDefinition};

/*
    Typical unit:
    1. `define_router("MyRouter", ScopeConfig::default(), |r| { ... })`
    2. Inside, declare pipelines at the root with `r.pipeline("browser")?`.
    3. Open scopes with `r.scope(ScopeOptions::new().path("/admin").namespace("Admin"), |r| { ... })`.
    4. Enable pipelines on the current scope with `r.pipe_through(["browser"])?`.
    5. Declare leaves with `r.get("/users", "UserController", "index")?`.
    6. The closure returns, the stack is checked for balance, and a `CompiledRouter` comes back.
    Front ends that need finer control drive a `ScopeContext` directly.
*/
