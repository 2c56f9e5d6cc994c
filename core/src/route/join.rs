// routescope/src/route/join.rs

//! The join algorithm: folds the whole scope stack, root to leaf, together with one leaf
//! declaration into a flat `Route`.
//!
//! Path, namespace, name, pipelines and metadata merge across every level. The host is
//! the exception: only the top scope is consulted, so a nested scope without a host
//! clears any host declared further out.

use super::definition::{Route, RouteOptions};
use crate::config::ScopeConfig;
use crate::core::stack::ScopeStack;
use crate::core::verb::Verb;
use crate::naming::Conventions;
use std::collections::BTreeMap;

/// A leaf route declaration as handed over by the front end.
pub(crate) struct Leaf<'a> {
  pub verb: Verb,
  pub path: &'a str,
  pub controller: &'a str,
  pub action: &'a str,
  pub options: RouteOptions,
}

pub(crate) fn join(stack: &ScopeStack, leaf: Leaf<'_>, conventions: &dyn Conventions, config: &ScopeConfig) -> Route {
  let leaf_name = leaf
    .options
    .name
    .or_else(|| conventions.resource_name(leaf.controller, &config.controller_suffix));

  Route {
    verb: leaf.verb,
    path: join_path(stack, conventions.split_path(leaf.path)),
    controller: join_namespace(stack, leaf.controller, conventions),
    action: leaf.action.to_string(),
    name: join_name(stack, leaf_name),
    pipe_through: join_pipe_through(stack),
    host: join_host(stack),
    private: join_map(stack.iter().map(|s| &s.private), leaf.options.private),
    assigns: join_map(stack.iter().map(|s| &s.assigns), leaf.options.assigns),
  }
}

fn join_path(stack: &ScopeStack, leaf_segments: Vec<String>) -> String {
  let segments: Vec<&str> = stack
    .iter()
    .flat_map(|scope| scope.path_segments.iter())
    .chain(leaf_segments.iter())
    .map(String::as_str)
    .collect();
  format!("/{}", segments.join("/"))
}

fn join_namespace(stack: &ScopeStack, controller: &str, conventions: &dyn Conventions) -> String {
  let parts: Vec<&str> = stack
    .iter()
    .filter_map(|scope| scope.namespace.as_deref())
    .chain(std::iter::once(controller))
    .collect();
  conventions.concat_namespace(&parts)
}

fn join_name(stack: &ScopeStack, leaf_name: Option<String>) -> Option<String> {
  let fragments: Vec<&str> = stack
    .iter()
    .filter_map(|scope| scope.name.as_deref())
    .chain(leaf_name.as_deref())
    .collect();
  if fragments.is_empty() {
    None
  } else {
    Some(fragments.join("_"))
  }
}

fn join_pipe_through(stack: &ScopeStack) -> Vec<String> {
  stack.iter().flat_map(|scope| scope.pipes().iter().cloned()).collect()
}

fn join_host(stack: &ScopeStack) -> Option<String> {
  stack.top().host.clone()
}

// Later levels override earlier keys; the leaf's own map is applied last.
fn join_map<'s>(
  levels: impl Iterator<Item = &'s BTreeMap<String, String>>,
  leaf: BTreeMap<String, String>,
) -> BTreeMap<String, String> {
  let mut merged = BTreeMap::new();
  for level in levels {
    merged.extend(level.iter().map(|(k, v)| (k.clone(), v.clone())));
  }
  merged.extend(leaf);
  merged
}
