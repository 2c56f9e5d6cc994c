// routescope/src/pipeline/registry.rs

//! Defines `PipelineRegistry`, the append-only set of pipeline names declared in one
//! definition unit, and the validation applied to every `pipe_through` batch.

use crate::error::{ScopeError, ScopeResult};
use std::collections::HashSet;
use tracing::{event, Level};

/// Declared pipeline names, kept in declaration order.
///
/// The reserved always-active pipeline is never a member.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineRegistry {
  order: Vec<String>,
  known: HashSet<String>,
}

impl PipelineRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  /// Declares `name`. Re-declaring is a no-op; returns whether the name was new.
  pub fn define<S: Into<String>>(&mut self, name: S) -> bool {
    let name = name.into();
    if self.known.contains(&name) {
      event!(Level::TRACE, pipeline = %name, "Pipeline already declared; ignoring re-declaration.");
      return false;
    }
    self.known.insert(name.clone());
    self.order.push(name);
    true
  }

  pub fn contains(&self, name: &str) -> bool {
    self.known.contains(name)
  }

  pub fn len(&self) -> usize {
    self.order.len()
  }

  pub fn is_empty(&self) -> bool {
    self.order.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
    self.order.iter().map(String::as_str)
  }

  /// Checks every name of a `pipe_through` batch, in order, without touching any scope.
  ///
  /// The first reserved or undeclared name fails the whole batch.
  pub fn validate<S: AsRef<str>>(&self, names: &[S], reserved: &str) -> ScopeResult<()> {
    for name in names {
      let name = name.as_ref();
      if name == reserved {
        event!(Level::ERROR, pipeline = %name, "Reserved pipeline referenced in pipe_through.");
        return Err(ScopeError::ReservedPipeline {
          pipeline: name.to_string(),
        });
      }
      if !self.contains(name) {
        event!(Level::ERROR, pipeline = %name, "Unknown pipeline referenced in pipe_through.");
        return Err(ScopeError::UnknownPipeline {
          pipeline: name.to_string(),
        });
      }
    }
    Ok(())
  }
}
