// routescope/src/router/definition.rs

//! `RouterDefinition` drives one `ScopeContext` through a whole definition unit and
//! collects the routes it resolves, the way a declaration front end would.

use super::compiled::CompiledRouter;
use crate::config::ScopeConfig;
use crate::context::ScopeContext;
use crate::core::scope::ScopeOptions;
use crate::core::verb::Verb;
use crate::error::{ScopeError, ScopeResult};
use crate::naming::Conventions;
use crate::route::{Route, RouteOptions};
use tracing::{event, instrument, Level};

#[derive(Debug)]
pub struct RouterDefinition {
  name: String,
  ctx: ScopeContext,
  routes: Vec<Route>,
}

impl RouterDefinition {
  /// Starts a definition unit with an initialized context.
  pub fn new<S: Into<String>>(name: S, config: ScopeConfig) -> Self {
    Self {
      name: name.into(),
      ctx: ScopeContext::initialized(config),
      routes: Vec::new(),
    }
  }

  pub fn with_conventions<C: Conventions + 'static>(mut self, conventions: C) -> Self {
    self.ctx = self.ctx.with_conventions(conventions);
    self
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn context(&self) -> &ScopeContext {
    &self.ctx
  }

  /// Routes resolved so far.
  pub fn routes(&self) -> &[Route] {
    &self.routes
  }

  /// Declares a pipeline. Pipelines belong to the unit as a whole, so declaring one
  /// inside a scope is rejected.
  pub fn pipeline<S: Into<String>>(&mut self, name: S) -> ScopeResult<&mut Self> {
    let name = name.into();
    if self.ctx.within_scope()? {
      event!(Level::ERROR, pipeline = %name, "Pipeline declared inside a scope.");
      return Err(ScopeError::PipelineInsideScope { pipeline: name });
    }
    self.ctx.define_pipeline(name)?;
    Ok(self)
  }

  pub fn pipe_through<I, S>(&mut self, names: I) -> ScopeResult<&mut Self>
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.ctx.pipe_through(names)?;
    Ok(self)
  }

  /// Declares routes inside a nested scope; the scope is closed again even if `body` fails.
  pub fn scope<O, F>(&mut self, options: O, body: F) -> ScopeResult<&mut Self>
  where
    O: Into<ScopeOptions>,
    F: FnOnce(&mut Self) -> ScopeResult<()>,
  {
    self.ctx.push(options)?;
    let result = body(self);
    self.ctx.pop()?;
    result?;
    Ok(self)
  }

  pub fn route(
    &mut self,
    verb: Verb,
    path: &str,
    controller: &str,
    action: &str,
    options: RouteOptions,
  ) -> ScopeResult<&mut Self> {
    let route = self.ctx.route(verb, path, controller, action, options)?;
    self.routes.push(route);
    Ok(self)
  }

  pub fn get(&mut self, path: &str, controller: &str, action: &str) -> ScopeResult<&mut Self> {
    self.route(Verb::Get, path, controller, action, RouteOptions::default())
  }

  pub fn post(&mut self, path: &str, controller: &str, action: &str) -> ScopeResult<&mut Self> {
    self.route(Verb::Post, path, controller, action, RouteOptions::default())
  }

  pub fn put(&mut self, path: &str, controller: &str, action: &str) -> ScopeResult<&mut Self> {
    self.route(Verb::Put, path, controller, action, RouteOptions::default())
  }

  pub fn patch(&mut self, path: &str, controller: &str, action: &str) -> ScopeResult<&mut Self> {
    self.route(Verb::Patch, path, controller, action, RouteOptions::default())
  }

  pub fn delete(&mut self, path: &str, controller: &str, action: &str) -> ScopeResult<&mut Self> {
    self.route(Verb::Delete, path, controller, action, RouteOptions::default())
  }

  pub fn options(&mut self, path: &str, controller: &str, action: &str) -> ScopeResult<&mut Self> {
    self.route(Verb::Options, path, controller, action, RouteOptions::default())
  }

  pub fn head(&mut self, path: &str, controller: &str, action: &str) -> ScopeResult<&mut Self> {
    self.route(Verb::Head, path, controller, action, RouteOptions::default())
  }

  /// Closes the unit. Fails with `UnbalancedScopes` if any scope is still open.
  #[instrument(name = "RouterDefinition::build", skip_all, fields(router = %self.name), err(Display))]
  pub fn build(self) -> ScopeResult<CompiledRouter> {
    let pipelines = self.ctx.finish()?;
    event!(Level::INFO, routes = self.routes.len(), "Router definition compiled.");
    Ok(CompiledRouter {
      name: self.name,
      routes: self.routes,
      pipelines: pipelines.iter().map(str::to_string).collect(),
    })
  }
}

/// Runs a whole definition unit: creates the context, hands it to `body`, and builds.
pub fn define_router<S, F>(name: S, config: ScopeConfig, body: F) -> ScopeResult<CompiledRouter>
where
  S: Into<String>,
  F: FnOnce(&mut RouterDefinition) -> ScopeResult<()>,
{
  let mut definition = RouterDefinition::new(name, config);
  body(&mut definition)?;
  definition.build()
}
