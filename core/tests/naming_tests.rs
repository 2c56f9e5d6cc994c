// tests/naming_tests.rs
mod common;

use common::*;
use routescope::naming::{split_path, underscore};
use routescope::{Conventions, DefaultConventions, RouteOptions, ScopeConfig, ScopeContext, ScopeOptions, Verb};

#[test]
fn test_split_path_drops_empty_segments() {
  assert_eq!(split_path("/api/v1/"), vec!["api", "v1"]);
  assert_eq!(split_path("//a//b"), vec!["a", "b"]);
  assert!(split_path("/").is_empty());
  assert!(split_path("").is_empty());
}

#[test]
fn test_underscore() {
  assert_eq!(underscore("User"), "user");
  assert_eq!(underscore("AdminUser"), "admin_user");
  assert_eq!(underscore("HTTPServer"), "http_server");
  assert_eq!(underscore("V1Posts"), "v1_posts");
  assert_eq!(underscore("already_snake"), "already_snake");
  assert_eq!(underscore("line-item"), "line_item");
}

#[test]
fn test_resource_name() {
  let conventions = DefaultConventions::default();
  assert_eq!(
    conventions.resource_name("UserController", "Controller").as_deref(),
    Some("user")
  );
  assert_eq!(
    conventions.resource_name("MyApp::Admin::LineItemController", "Controller").as_deref(),
    Some("line_item")
  );
  assert_eq!(
    conventions.resource_name("Users", "Controller").as_deref(),
    Some("users")
  );
  assert_eq!(
    conventions.resource_name("PageController", "").as_deref(),
    Some("page_controller")
  );
  assert_eq!(conventions.resource_name("Controller", "Controller"), None);
  assert_eq!(conventions.resource_name("", "Controller"), None);
}

#[test]
fn test_concat_namespace_flattens_qualified_parts() {
  let conventions = DefaultConventions::default();
  assert_eq!(conventions.concat_namespace(&["A", "B", "C"]), "A::B::C");
  assert_eq!(conventions.concat_namespace(&["MyApp::Web", "", "UserController"]), "MyApp::Web::UserController");
  assert_eq!(conventions.concat_namespace(&["::Api::", "PostController"]), "Api::PostController");

  let dotted = DefaultConventions::new(".");
  assert_eq!(dotted.concat_namespace(&["A", "B.C"]), "A.B.C");
}

#[test]
fn test_controller_suffix_from_config() {
  setup_tracing();
  let ctx = ScopeContext::initialized(ScopeConfig::new().with_controller_suffix("Handler"));
  let route = ctx
    .route(Verb::Get, "/", "OrderHandler", "list", RouteOptions::default())
    .unwrap();
  assert_eq!(route.name(), Some("order"));
}

// Kebab-case paths and dashed names, to show a front end can swap the helpers.
struct KebabConventions;

impl Conventions for KebabConventions {
  fn split_path(&self, raw: &str) -> Vec<String> {
    split_path(raw).into_iter().map(|s| s.to_lowercase()).collect()
  }

  fn resource_name(&self, controller: &str, _suffix: &str) -> Option<String> {
    Some(underscore(controller).replace('_', "-"))
  }

  fn concat_namespace(&self, parts: &[&str]) -> String {
    parts.join("/")
  }
}

#[test]
fn test_custom_conventions() {
  setup_tracing();
  let mut ctx = ScopeContext::initialized(ScopeConfig::default()).with_conventions(KebabConventions);
  ctx.push(ScopeOptions::new().path("/Shop").namespace("shop")).unwrap();

  let route = ctx
    .route(Verb::Get, "/Items", "LineItem", "index", RouteOptions::default())
    .unwrap();
  assert_eq!(route.path(), "/shop/items");
  assert_eq!(route.controller(), "shop/LineItem");
  assert_eq!(route.name(), Some("line-item"));
}
