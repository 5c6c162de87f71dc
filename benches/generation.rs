//! Board generation benchmarks: shuffle plus parity correction.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use puzzle_core::games::sliding::SlidingTilesBuilder;

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("board_generation");
    for size in [3usize, 4, 5] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut seed = 0u64;
            b.iter(|| {
                seed = seed.wrapping_add(1);
                SlidingTilesBuilder::new().size(size).seed(seed).build()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generation);
criterion_main!(benches);
