// Comparing the pool's two acquire paths: a warm hit against a cold miss.

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use patternkit::pool::{CreationObserver, SharedPool};
use patternkit::shapes::Circle;

struct Quiet;

impl CreationObserver for Quiet {
    fn entity_created(&self, _discriminator: &str) {}
}

fn benchmark_acquire_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("shared_pool_acquire");

    let warm: SharedPool<Circle> = SharedPool::with_observer(Arc::new(Quiet));
    warm.acquire("red").unwrap();

    group.bench_function("hit", |b| {
        b.iter(|| warm.acquire(black_box("red")).unwrap())
    });

    group.bench_function("miss", |b| {
        b.iter_batched(
            || SharedPool::<Circle>::with_observer(Arc::new(Quiet)),
            |pool| pool.acquire(black_box("red")).unwrap(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, benchmark_acquire_paths);
criterion_main!(benches);
