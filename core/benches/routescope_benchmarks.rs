use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use routescope::{define_router, RouteOptions, ScopeConfig, ScopeContext, ScopeOptions, Verb};

// --- Helper: a context nested `depth` scopes deep, each contributing every field ---
fn nested_context(depth: usize, pipes_per_scope: usize) -> ScopeContext {
  let mut ctx = ScopeContext::initialized(ScopeConfig::default());
  for p in 0..pipes_per_scope {
    ctx.define_pipeline(format!("pipe_{}", p)).unwrap();
  }
  for level in 0..depth {
    ctx
      .push(
        ScopeOptions::new()
          .path(format!("/level{}", level))
          .namespace(format!("Level{}", level))
          .name(format!("l{}", level)),
      )
      .unwrap();
    ctx
      .pipe_through((0..pipes_per_scope).map(|p| format!("pipe_{}", p)))
      .unwrap();
  }
  ctx
}

// --- Benchmark Functions ---

fn bench_route_join_by_depth(c: &mut Criterion) {
  let mut group = c.benchmark_group("RouteJoinByDepth");

  for depth in [0usize, 1, 4, 16].iter() {
    for pipes in [0usize, 2].iter() {
      let ctx = nested_context(*depth, *pipes);

      group.throughput(Throughput::Elements(1));
      group.bench_with_input(
        BenchmarkId::new(format!("{}pipes", pipes), depth),
        depth,
        |b, _| {
          b.iter(|| {
            let route = ctx
              .route(
                Verb::Get,
                "/users/:id",
                "UserController",
                "show",
                RouteOptions::default(),
              )
              .unwrap();
            criterion::black_box(route);
          })
        },
      );
    }
  }
  group.finish();
}

fn bench_push_pop(c: &mut Criterion) {
  let mut group = c.benchmark_group("ScopePushPop");
  let mut ctx = ScopeContext::initialized(ScopeConfig::default());

  group.bench_function("push_pop_path_scope", |b| {
    b.iter(|| {
      ctx.push(ScopeOptions::new().path("/api/v1")).unwrap();
      ctx.pop().unwrap();
    })
  });
  group.finish();
}

fn bench_define_router(c: &mut Criterion) {
  let mut group = c.benchmark_group("DefineRouter");

  for resources in [1usize, 10, 50].iter() {
    group.throughput(Throughput::Elements(*resources as u64 * 2));
    group.bench_with_input(BenchmarkId::from_parameter(resources), resources, |b, &n| {
      b.iter(|| {
        let router = define_router("Bench.Router", ScopeConfig::default(), |r| {
          r.pipeline("api")?;
          r.scope(ScopeOptions::new().path("/api").namespace("Api").name("api"), |r| {
            r.pipe_through(["api"])?;
            for idx in 0..n {
              let path = format!("/resource{}", idx);
              r.get(&path, "ResourceController", "index")?;
              r.post(&path, "ResourceController", "create")?;
            }
            Ok(())
          })?;
          Ok(())
        })
        .unwrap();
        criterion::black_box(router);
      })
    });
  }
  group.finish();
}

criterion_group!(benches, bench_route_join_by_depth, bench_push_pop, bench_define_router);
criterion_main!(benches);
