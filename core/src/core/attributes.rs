// routescope/src/core/attributes.rs

//! Per-unit storage for the scope stack and the pipeline registry.
//!
//! Both slots stay empty until `init` runs; every read of an empty slot fails with
//! `ScopeError::NotInitialized` naming the slot.

use super::stack::ScopeStack;
use crate::error::{ScopeError, ScopeResult};
use crate::pipeline::PipelineRegistry;
use tracing::{event, Level};

pub const SCOPE_STACK_ATTRIBUTE: &str = "scope_stack";
pub const PIPELINES_ATTRIBUTE: &str = "pipelines";

#[derive(Debug, Default)]
pub struct AttributeStore {
  scopes: Option<ScopeStack>,
  pipelines: Option<PipelineRegistry>,
}

impl AttributeStore {
  /// An uninitialized store.
  pub fn new() -> Self {
    Self::default()
  }

  /// Resets the store to `[root]` and an empty registry, discarding any previous state.
  pub fn init(&mut self) {
    if self.is_initialized() {
      event!(Level::DEBUG, "Attribute store re-initialized; previous scopes and pipelines discarded.");
    }
    self.scopes = Some(ScopeStack::new());
    self.pipelines = Some(PipelineRegistry::new());
  }

  pub fn is_initialized(&self) -> bool {
    self.scopes.is_some() && self.pipelines.is_some()
  }

  /// Empties both slots and hands back their contents, if they were set.
  pub fn teardown(&mut self) -> Option<(ScopeStack, PipelineRegistry)> {
    let scopes = self.scopes.take();
    let pipelines = self.pipelines.take();
    scopes.zip(pipelines)
  }

  pub fn scopes(&self) -> ScopeResult<&ScopeStack> {
    self.scopes.as_ref().ok_or(ScopeError::NotInitialized {
      attribute: SCOPE_STACK_ATTRIBUTE,
    })
  }

  pub fn scopes_mut(&mut self) -> ScopeResult<&mut ScopeStack> {
    self.scopes.as_mut().ok_or(ScopeError::NotInitialized {
      attribute: SCOPE_STACK_ATTRIBUTE,
    })
  }

  pub fn pipelines(&self) -> ScopeResult<&PipelineRegistry> {
    self.pipelines.as_ref().ok_or(ScopeError::NotInitialized {
      attribute: PIPELINES_ATTRIBUTE,
    })
  }

  pub fn pipelines_mut(&mut self) -> ScopeResult<&mut PipelineRegistry> {
    self.pipelines.as_mut().ok_or(ScopeError::NotInitialized {
      attribute: PIPELINES_ATTRIBUTE,
    })
  }
}
