// routescope/src/context.rs

//! Defines `ScopeContext`, the explicit per-unit handle every scope operation runs against.
//!
//! A context is created for one definition unit, initialized, driven by the front end
//! through `push`/`pop`/`define_pipeline`/`pipe_through`/`route`, and consumed by `finish`.
//! Nothing is shared between contexts, so separate units can be resolved on separate
//! threads without synchronization.

use crate::config::ScopeConfig;
use crate::core::attributes::AttributeStore;
use crate::core::scope::{Scope, ScopeOptions};
use crate::core::stack::ScopeStack;
use crate::core::verb::Verb;
use crate::error::{ScopeError, ScopeResult};
use crate::naming::{Conventions, DefaultConventions};
use crate::pipeline::PipelineRegistry;
use crate::route::join::{join, Leaf};
use crate::route::{Route, RouteOptions};
use std::fmt;
use tracing::{event, instrument, Level};

pub struct ScopeContext {
  store: AttributeStore,
  config: ScopeConfig,
  conventions: Box<dyn Conventions>,
}

impl ScopeContext {
  /// Creates an uninitialized context. Call `init` before anything else.
  pub fn new(config: ScopeConfig) -> Self {
    let conventions = DefaultConventions::from_config(&config);
    Self {
      store: AttributeStore::new(),
      config,
      conventions: Box::new(conventions),
    }
  }

  /// Creates a context that is already initialized.
  pub fn initialized(config: ScopeConfig) -> Self {
    let mut ctx = Self::new(config);
    ctx.init();
    ctx
  }

  /// Replaces the path/name/namespace helpers used while joining.
  pub fn with_conventions<C: Conventions + 'static>(mut self, conventions: C) -> Self {
    self.conventions = Box::new(conventions);
    self
  }

  pub fn config(&self) -> &ScopeConfig {
    &self.config
  }

  /// Resets the unit to a lone root scope and an empty pipeline registry.
  pub fn init(&mut self) {
    self.store.init();
    event!(Level::DEBUG, "Scope context initialized.");
  }

  pub fn is_initialized(&self) -> bool {
    self.store.is_initialized()
  }

  /// Pushes a new scope. Its pipe list starts empty; enclosing pipes are picked up at
  /// join time, not copied here.
  pub fn push<O: Into<ScopeOptions>>(&mut self, options: O) -> ScopeResult<()> {
    let options = options.into();
    let scope = Scope {
      path_segments: options
        .path
        .as_deref()
        .map(|raw| self.conventions.split_path(raw))
        .unwrap_or_default(),
      namespace: options.namespace,
      name: options.name,
      host: options.host,
      private: options.private,
      assigns: options.assigns,
      pipes: Vec::new(),
    };

    let stack = self.store.scopes_mut()?;
    stack.push(scope);
    event!(Level::TRACE, depth = stack.depth(), "Scope pushed.");
    Ok(())
  }

  /// Shorthand for a scope that only contributes a path.
  pub fn push_path(&mut self, path: &str) -> ScopeResult<()> {
    self.push(ScopeOptions::new().path(path))
  }

  /// Pops the top scope.
  ///
  /// Panics if only the root scope remains.
  pub fn pop(&mut self) -> ScopeResult<()> {
    let stack = self.store.scopes_mut()?;
    stack.pop();
    event!(Level::TRACE, depth = stack.depth(), "Scope popped.");
    Ok(())
  }

  /// Whether at least one scope is open above the root.
  pub fn within_scope(&self) -> ScopeResult<bool> {
    Ok(self.store.scopes()?.within_scope())
  }

  pub fn depth(&self) -> ScopeResult<usize> {
    Ok(self.store.scopes()?.depth())
  }

  pub fn stack(&self) -> ScopeResult<&ScopeStack> {
    self.store.scopes()
  }

  pub fn pipelines(&self) -> ScopeResult<&PipelineRegistry> {
    self.store.pipelines()
  }

  /// Declares a pipeline so it can be piped through. Idempotent.
  ///
  /// The reserved pipeline is always active and can never be declared.
  pub fn define_pipeline<S: Into<String>>(&mut self, name: S) -> ScopeResult<()> {
    let name = name.into();
    let pipelines = self.store.pipelines_mut()?;
    if name == self.config.reserved_pipeline {
      event!(Level::ERROR, pipeline = %name, "Reserved pipeline cannot be declared.");
      return Err(ScopeError::ReservedPipeline { pipeline: name });
    }
    if pipelines.define(name.clone()) {
      event!(Level::DEBUG, pipeline = %name, "Pipeline declared.");
    }
    Ok(())
  }

  /// Enables `names` on the current top scope, in order, duplicates included.
  ///
  /// The batch is validated as a whole first: one reserved or undeclared name and nothing
  /// is appended.
  #[instrument(name = "ScopeContext::pipe_through", skip_all, err(Display))]
  pub fn pipe_through<I, S>(&mut self, names: I) -> ScopeResult<()>
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    let names: Vec<String> = names.into_iter().map(Into::into).collect();
    self
      .store
      .pipelines()?
      .validate(names.as_slice(), &self.config.reserved_pipeline)?;

    let stack = self.store.scopes_mut()?;
    let depth = stack.depth();
    stack.top_mut().pipes.extend(names.iter().cloned());
    event!(Level::DEBUG, depth, pipelines = ?names, "Pipelines enabled on current scope.");
    Ok(())
  }

  /// Resolves one leaf declaration against the current stack.
  #[instrument(
    name = "ScopeContext::route",
    skip(self, verb, options),
    fields(verb = %verb),
    err(Display)
  )]
  pub fn route(
    &self,
    verb: Verb,
    path: &str,
    controller: &str,
    action: &str,
    options: RouteOptions,
  ) -> ScopeResult<Route> {
    let stack = self.store.scopes()?;
    let leaf = Leaf {
      verb,
      path,
      controller,
      action,
      options,
    };
    let route = join(stack, leaf, self.conventions.as_ref(), &self.config);
    event!(
      Level::DEBUG,
      path = %route.path(),
      controller = %route.controller(),
      name = ?route.name(),
      "Route resolved."
    );
    Ok(route)
  }

  /// Runs `body` inside a freshly pushed scope and pops it afterwards, whether or not
  /// `body` succeeded. The body's result is returned.
  pub fn scope<O, F, T>(&mut self, options: O, body: F) -> ScopeResult<T>
  where
    O: Into<ScopeOptions>,
    F: FnOnce(&mut Self) -> ScopeResult<T>,
  {
    self.push(options)?;
    let result = body(self);
    self.pop()?;
    result
  }

  /// Ends the unit: fails if scopes are still open, otherwise tears the store down and
  /// returns the declared pipelines.
  pub fn finish(mut self) -> ScopeResult<PipelineRegistry> {
    let depth = self.store.scopes()?.depth();
    if depth > 1 {
      event!(Level::ERROR, depth, "Definition finished with open scopes.");
      return Err(ScopeError::UnbalancedScopes { depth: depth - 1 });
    }
    match self.store.teardown() {
      Some((_, pipelines)) => {
        event!(Level::DEBUG, pipelines = pipelines.len(), "Scope context finished.");
        Ok(pipelines)
      }
      None => Err(ScopeError::NotInitialized {
        attribute: crate::core::attributes::PIPELINES_ATTRIBUTE,
      }),
    }
  }
}

impl Default for ScopeContext {
  fn default() -> Self {
    Self::new(ScopeConfig::default())
  }
}

impl fmt::Debug for ScopeContext {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ScopeContext")
      .field("store", &self.store)
      .field("config", &self.config)
      .finish_non_exhaustive()
  }
}
