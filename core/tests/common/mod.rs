// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use once_cell::sync::Lazy;
use routescope::{ScopeConfig, ScopeContext, ScopeOptions};
use tracing::Level;

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Common Context Builders ---

/// An initialized context with default settings.
pub fn new_ctx() -> ScopeContext {
  ScopeContext::initialized(ScopeConfig::default())
}

/// An initialized context with the given pipelines already declared at the root.
pub fn ctx_with_pipelines(pipelines: &[&str]) -> ScopeContext {
  let mut ctx = new_ctx();
  for name in pipelines {
    ctx.define_pipeline(*name).unwrap();
  }
  ctx
}

pub fn path_scope(path: &str) -> ScopeOptions {
  ScopeOptions::new().path(path)
}

/// Pipes currently enabled on the top scope.
pub fn top_pipes(ctx: &ScopeContext) -> Vec<String> {
  ctx.stack().unwrap().top().pipes().to_vec()
}
