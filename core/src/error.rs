// routescope/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

/// Failures raised while resolving scopes for one definition unit.
///
/// None of these are recoverable at this layer: the caller aborts the unit and turns the
/// error into a diagnostic.
#[derive(Debug, Error)]
pub enum ScopeError {
  #[error("Attribute '{attribute}' is not initialized; call init() before declaring scopes or routes")]
  NotInitialized { attribute: &'static str },

  #[error("The '{pipeline}' pipeline is always piped through and cannot be referenced explicitly")]
  ReservedPipeline { pipeline: String },

  #[error("Unknown pipeline '{pipeline}'; declare it before piping through it")]
  UnknownPipeline { pipeline: String },

  #[error("Unbalanced scopes: {depth} scope(s) still open at end of definition")]
  UnbalancedScopes { depth: usize },

  #[error("Cannot declare pipeline '{pipeline}' inside a scope")]
  PipelineInsideScope { pipeline: String },

  #[error("Error raised by the declaring front end. Source: {source}")]
  Frontend {
    #[source]
    source: AnyhowError,
  },
}

// Lets front-end closures written against anyhow use `?` inside scope blocks.
impl From<AnyhowError> for ScopeError {
  fn from(err: AnyhowError) -> Self {
    // An anyhow error that already wraps a ScopeError is unwrapped rather than nested.
    match err.downcast::<ScopeError>() {
      Ok(scope_err) => scope_err,
      Err(source) => ScopeError::Frontend { source },
    }
  }
}

pub type ScopeResult<T, E = ScopeError> = std::result::Result<T, E>;
