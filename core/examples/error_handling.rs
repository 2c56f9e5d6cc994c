// routescope/examples/error_handling.rs

use routescope::{define_router, ScopeConfig, ScopeContext, ScopeError, ScopeOptions};
use tracing::{error, info};

// 1. Define an application error type that can carry scope errors
#[derive(Debug, thiserror::Error)]
enum ExampleAppError {
  #[error("Route definition rejected: {0}")]
  Definition(#[from] ScopeError),
}

fn main() {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();
  info!("--- Error Handling Example ---");

  // Scenario 1: piping through a pipeline that was never declared
  info!("Scenario 1: unknown pipeline");
  if let Err(e) = unknown_pipeline() {
    error!("{}", e);
  }

  // Scenario 2: piping through the reserved, always-active pipeline
  info!("Scenario 2: reserved pipeline");
  if let Err(e) = reserved_pipeline() {
    error!("{}", e);
  }

  // Scenario 3: a scope left open when the unit ends
  info!("Scenario 3: unbalanced scopes");
  if let Err(e) = unbalanced_scopes() {
    error!("{}", e);
  }
}

fn unknown_pipeline() -> Result<(), ExampleAppError> {
  define_router("Example.Router", ScopeConfig::default(), |r| {
    r.pipeline("browser")?;
    r.scope("/", |r| {
      r.pipe_through(["browser", "brwoser"])?;
      Ok(())
    })?;
    Ok(())
  })?;
  Ok(())
}

fn reserved_pipeline() -> Result<(), ExampleAppError> {
  let mut ctx = ScopeContext::initialized(ScopeConfig::default());
  ctx.pipe_through(["before"])?;
  Ok(())
}

fn unbalanced_scopes() -> Result<(), ExampleAppError> {
  let mut ctx = ScopeContext::initialized(ScopeConfig::default());
  ctx.push(ScopeOptions::new().path("/admin"))?;
  ctx.finish()?;
  Ok(())
}
