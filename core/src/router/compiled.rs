// routescope/src/router/compiled.rs

//! The result of one finished definition unit.

use crate::route::Route;
use std::fmt;

/// Every route resolved by one definition unit, in declaration order, plus the pipelines it declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledRouter {
  pub(crate) name: String,
  pub(crate) routes: Vec<Route>,
  pub(crate) pipelines: Vec<String>,
}

impl CompiledRouter {
  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn routes(&self) -> &[Route] {
    &self.routes
  }

  pub fn pipelines(&self) -> &[String] {
    &self.pipelines
  }

  pub fn len(&self) -> usize {
    self.routes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.routes.is_empty()
  }

  /// First route declared under `name`.
  pub fn route_named(&self, name: &str) -> Option<&Route> {
    self.routes.iter().find(|r| r.name() == Some(name))
  }

  /// Routes whose pipe_through includes `pipeline`.
  pub fn routes_for_pipeline<'a>(&'a self, pipeline: &'a str) -> impl Iterator<Item = &'a Route> + 'a {
    self
      .routes
      .iter()
      .filter(move |r| r.pipe_through().iter().any(|p| p == pipeline))
  }
}

impl fmt::Display for CompiledRouter {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for route in &self.routes {
      writeln!(f, "{}", route)?;
    }
    Ok(())
  }
}
