// routescope/src/core/stack.rs

//! The LIFO stack of scopes for one definition unit.

use super::scope::Scope;

/// Root-to-leaf sequence of scopes. The root is held apart from the nested levels, so the
/// stack can never be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeStack {
  root: Scope,
  nested: Vec<Scope>,
}

impl ScopeStack {
  /// A stack holding only the empty root scope.
  pub fn new() -> Self {
    Self::default()
  }

  pub fn push(&mut self, scope: Scope) {
    self.nested.push(scope);
  }

  /// Removes and returns the top scope.
  ///
  /// Panics when only the root remains: an unmatched pop is a defect in the declaring code.
  pub fn pop(&mut self) -> Scope {
    match self.nested.pop() {
      Some(scope) => scope,
      None => panic!("routescope setup error: cannot pop the root scope (unmatched scope end)."),
    }
  }

  /// Number of scopes including the root; never less than 1.
  pub fn depth(&self) -> usize {
    self.nested.len() + 1
  }

  pub fn within_scope(&self) -> bool {
    !self.nested.is_empty()
  }

  /// True when the stack is back to `[root]`.
  pub fn is_balanced(&self) -> bool {
    self.nested.is_empty()
  }

  pub fn root(&self) -> &Scope {
    &self.root
  }

  /// The nearest enclosing scope.
  pub fn top(&self) -> &Scope {
    self.nested.last().unwrap_or(&self.root)
  }

  pub(crate) fn top_mut(&mut self) -> &mut Scope {
    match self.nested.last_mut() {
      Some(scope) => scope,
      None => &mut self.root,
    }
  }

  /// Iterates from the root (index 0) to the top of the stack.
  pub fn iter(&self) -> impl Iterator<Item = &Scope> + '_ {
    std::iter::once(&self.root).chain(self.nested.iter())
  }
}
