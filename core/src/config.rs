// routescope/src/config.rs

//! Per-unit settings for scope resolution.

/// Settings carried by a `ScopeContext` for the lifetime of one definition unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeConfig {
  /// Pipeline that is implicitly applied to every route and may never be piped through explicitly.
  pub reserved_pipeline: String,
  /// Separator used when qualifying controller references with scope namespaces.
  pub namespace_separator: String,
  /// Suffix stripped from a controller reference when deriving a default route name.
  pub controller_suffix: String,
}

impl Default for ScopeConfig {
  fn default() -> Self {
    Self {
      reserved_pipeline: "before".to_string(),
      namespace_separator: "::".to_string(),
      controller_suffix: "Controller".to_string(),
    }
  }
}

impl ScopeConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_reserved_pipeline<S: Into<String>>(mut self, name: S) -> Self {
    self.reserved_pipeline = name.into();
    self
  }

  pub fn with_namespace_separator<S: Into<String>>(mut self, separator: S) -> Self {
    self.namespace_separator = separator.into();
    self
  }

  pub fn with_controller_suffix<S: Into<String>>(mut self, suffix: S) -> Self {
    self.controller_suffix = suffix.into();
    self
  }
}
