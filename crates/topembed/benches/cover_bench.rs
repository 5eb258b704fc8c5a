//! Criterion benchmarks for the double planar cover search.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use topembed::api::*;

fn bench_cover(c: &mut Criterion) {
    let mut group = c.benchmark_group("cover");
    group.sample_size(10);
    let cases = [
        ("k5", families::complete(5)),
        ("k33", families::complete_bipartite(3, 3)),
        ("wagner", families::wagner()),
        ("k6", families::complete(6)),
    ];
    for (name, g) in &cases {
        group.bench_with_input(BenchmarkId::new("find_double_planar_cover", name), g, |b, g| {
            b.iter(|| find_double_planar_cover(&PathAddition, g, CoverCfg::default()).is_some())
        });
    }
    // Exhausts the co-tree.
    let k44 = families::complete_bipartite(4, 4);
    group.bench_function("k44_exhaustive", |b| {
        b.iter(|| find_double_planar_cover(&PathAddition, &k44, CoverCfg::default()).is_none())
    });

    let petersen = families::petersen();
    let dpc = find_double_planar_cover(&PathAddition, &petersen, CoverCfg::default());
    if let Some(dpc) = dpc {
        group.bench_function("embedding_from_dpc_petersen", |b| {
            b.iter_batched(
                || dpc.clone(),
                |dpc| euler_genus(&embedding_from_dpc(&petersen, &dpc)),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_cover);
criterion_main!(benches);
