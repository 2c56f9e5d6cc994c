// routescope/src/core/scope.rs

//! One nesting level's contribution to the routes declared inside it.

use std::collections::BTreeMap;

/// A single level of the scope stack.
///
/// Every field is fixed at push time except `pipes`, which only grows while this scope is
/// the top of the stack (see `ScopeStack::top_mut`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scope {
  pub path_segments: Vec<String>,
  pub namespace: Option<String>,
  pub name: Option<String>,
  pub host: Option<String>,
  pub private: BTreeMap<String, String>,
  pub assigns: BTreeMap<String, String>,
  pub(crate) pipes: Vec<String>,
}

impl Scope {
  /// Pipelines enabled at this level, in `pipe_through` call order.
  pub fn pipes(&self) -> &[String] {
    &self.pipes
  }

  /// The permanent root scope has every field empty.
  pub fn is_empty(&self) -> bool {
    *self == Scope::default()
  }
}

/// What a `push` contributes. The raw path is segmented when the scope is pushed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeOptions {
  pub path: Option<String>,
  pub namespace: Option<String>,
  pub name: Option<String>,
  pub host: Option<String>,
  pub private: BTreeMap<String, String>,
  pub assigns: BTreeMap<String, String>,
}

impl ScopeOptions {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn path<S: Into<String>>(mut self, path: S) -> Self {
    self.path = Some(path.into());
    self
  }

  pub fn namespace<S: Into<String>>(mut self, namespace: S) -> Self {
    self.namespace = Some(namespace.into());
    self
  }

  pub fn name<S: Into<String>>(mut self, name: S) -> Self {
    self.name = Some(name.into());
    self
  }

  pub fn host<S: Into<String>>(mut self, host: S) -> Self {
    self.host = Some(host.into());
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

// `scope("/api", ...)` shorthand: a bare string is a path-only scope.
impl From<&str> for ScopeOptions {
  fn from(path: &str) -> Self {
    ScopeOptions::new().path(path)
  }
}

impl From<String> for ScopeOptions {
  fn from(path: String) -> Self {
    ScopeOptions::new().path(path)
  }
}
