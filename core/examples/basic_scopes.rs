// routescope/examples/basic_scopes.rs

use routescope::{RouteOptions, ScopeConfig, ScopeContext, ScopeError, ScopeOptions, Verb};
use tracing::info;

fn main() -> Result<(), ScopeError> {
  // Initialize tracing (optional, for demonstration)
  tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

  info!("--- Basic Scope Resolution Example ---");

  // 1. Start a definition unit. The context begins as a lone root scope.
  let mut ctx = ScopeContext::initialized(ScopeConfig::default());

  // 2. Declare the pipelines routes may pipe through.
  ctx.define_pipeline("browser")?;
  ctx.define_pipeline("admin_auth")?;

  // 3. Open nested scopes, enabling pipelines on each while it is on top.
  ctx.push(ScopeOptions::new().path("/admin").namespace("Admin").name("admin"))?;
  ctx.pipe_through(["browser"])?;

  ctx.push(ScopeOptions::new().path("/reports").namespace("Reports").host("reports.example.com"))?;
  ctx.pipe_through(["admin_auth"])?;

  // 4. Resolve a leaf route against the whole stack.
  let route = ctx.route(Verb::Get, "/:id", "SummaryController", "show", RouteOptions::default())?;
  info!("Resolved: {}", route);
  info!("  pipe_through = {:?}", route.pipe_through());

  // 5. Close every scope, then end the unit. An open scope here would be an error.
  ctx.pop()?;
  let overview = ctx.route(Verb::Get, "/", "OverviewController", "index", RouteOptions::default())?;
  info!("Resolved: {}", overview);
  ctx.pop()?;

  let pipelines = ctx.finish()?;
  info!("Unit finished with {} declared pipeline(s).", pipelines.len());
  Ok(())
}
