// routescope/src/naming.rs

//! Primitive helpers consumed by the join algorithm: path segmentation, default route
//! names derived from controller references, and namespace qualification.
//!
//! They sit behind the `Conventions` trait so a front end with different naming rules can
//! plug its own in through `ScopeContext::with_conventions`.

use crate::config::ScopeConfig;

/// The string utilities the scope resolver delegates to.
pub trait Conventions: Send + Sync {
  /// Splits a raw path into its non-empty segments.
  fn split_path(&self, raw: &str) -> Vec<String>;

  /// Derives a default route name from a controller reference, or `None` when nothing is left.
  fn resource_name(&self, controller: &str, suffix: &str) -> Option<String>;

  /// Joins identifiers, root first, into one qualified identifier.
  fn concat_namespace(&self, parts: &[&str]) -> String;
}

/// `/`-separated paths, CamelCase controllers and `::`-qualified namespaces
/// (or whichever separator the config names).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultConventions {
  separator: String,
}

impl DefaultConventions {
  pub fn new<S: Into<String>>(separator: S) -> Self {
    Self {
      separator: separator.into(),
    }
  }

  pub fn from_config(config: &ScopeConfig) -> Self {
    Self::new(config.namespace_separator.clone())
  }

  pub fn separator(&self) -> &str {
    &self.separator
  }

  fn segments<'a>(&self, identifier: &'a str) -> Vec<&'a str> {
    if self.separator.is_empty() {
      return vec![identifier.trim()].into_iter().filter(|s| !s.is_empty()).collect();
    }
    identifier
      .split(self.separator.as_str())
      .map(str::trim)
      .filter(|s| !s.is_empty())
      .collect()
  }
}

impl Default for DefaultConventions {
  fn default() -> Self {
    Self::from_config(&ScopeConfig::default())
  }
}

impl Conventions for DefaultConventions {
  fn split_path(&self, raw: &str) -> Vec<String> {
    split_path(raw)
  }

  fn resource_name(&self, controller: &str, suffix: &str) -> Option<String> {
    let last = self.segments(controller).pop()?;
    let stem = if suffix.is_empty() {
      last
    } else {
      last.strip_suffix(suffix).unwrap_or(last)
    };
    if stem.is_empty() {
      return None;
    }
    Some(underscore(stem))
  }

  fn concat_namespace(&self, parts: &[&str]) -> String {
    parts
      .iter()
      .flat_map(|part| self.segments(part))
      .collect::<Vec<_>>()
      .join(&self.separator)
  }
}

/// Splits `raw` on `/`, dropping the empty segments produced by leading, trailing or doubled separators.
pub fn split_path(raw: &str) -> Vec<String> {
  raw
    .split('/')
    .filter(|segment| !segment.is_empty())
    .map(str::to_string)
    .collect()
}

/// Converts a CamelCase identifier to snake_case.
///
/// Acronyms stay together: `HTTPServer` becomes `http_server`. Dashes become underscores.
pub fn underscore(word: &str) -> String {
  let chars: Vec<char> = word.chars().collect();
  let mut out = String::with_capacity(word.len() + 4);

  for (idx, &c) in chars.iter().enumerate() {
    if c.is_uppercase() {
      if idx > 0 {
        let prev = chars[idx - 1];
        let next_is_lower = chars.get(idx + 1).map_or(false, |n| n.is_lowercase());
        if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower) {
          out.push('_');
        }
      }
      out.extend(c.to_lowercase());
    } else if c == '-' {
      out.push('_');
    } else {
      out.push(c);
    }
  }
  out
}
