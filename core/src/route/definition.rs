// routescope/src/route/definition.rs

//! Contains the flat `Route` record produced for each leaf declaration, and the
//! per-route `RouteOptions`.

use crate::core::verb::Verb;
use std::collections::BTreeMap;
use std::fmt;

/// A fully resolved route. Immutable once built; the caller that asked for it owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
  pub(crate) verb: Verb,
  pub(crate) path: String,
  pub(crate) controller: String,
  pub(crate) action: String,
  pub(crate) name: Option<String>,
  pub(crate) pipe_through: Vec<String>,
  pub(crate) host: Option<String>,
  pub(crate) private: BTreeMap<String, String>,
  pub(crate) assigns: BTreeMap<String, String>,
}

impl Route {
  pub fn verb(&self) -> &Verb {
    &self.verb
  }

  /// Absolute path, always starting with a single `/`.
  pub fn path(&self) -> &str {
    &self.path
  }

  /// Controller reference qualified by every enclosing scope namespace.
  ///
  /// This is the fully qualified namespace of the route; there is no separate namespace
  /// accessor.
  pub fn controller(&self) -> &str {
    &self.controller
  }

  pub fn action(&self) -> &str {
    &self.action
  }

  pub fn name(&self) -> Option<&str> {
    self.name.as_deref()
  }

  /// Pipelines to run for this route, outermost scope first.
  pub fn pipe_through(&self) -> &[String] {
    &self.pipe_through
  }

  pub fn host(&self) -> Option<&str> {
    self.host.as_deref()
  }

  pub fn private(&self) -> &BTreeMap<String, String> {
    &self.private
  }

  pub fn assigns(&self) -> &BTreeMap<String, String> {
    &self.assigns
  }
}

// One line per route, in the shape of a routes listing: `name  VERB  /path  Controller#action`.
impl fmt::Display for Route {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{}  {}  {}  {}#{}",
      self.name.as_deref().unwrap_or("-"),
      self.verb,
      self.path,
      self.controller,
      self.action
    )?;
    if let Some(host) = &self.host {
      write!(f, "  (host: {})", host)?;
    }
    Ok(())
  }
}

/// Per-route options accepted by `ScopeContext::route`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteOptions {
  /// Explicit name; when absent the name is derived from the controller reference.
  pub name: Option<String>,
  pub private: BTreeMap<String, String>,
  pub assigns: BTreeMap<String, String>,
}

impl RouteOptions {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn name<S: Into<String>>(mut self, name: S) -> Self {
    self.name = Some(name.into());
    self
  }

  pub fn private<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
    self.private.insert(key.into(), value.into());
    self
  }

  pub fn assign<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
    self.assigns.insert(key.into(), value.into());
    self
  }
}
