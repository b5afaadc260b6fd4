//! Benchmarks for step generation
//!
//! Measures how long each generator takes to record a full log for
//! increasing input sizes.

use algoviz_steps::{
    breadth_first, demo, depth_first, Graph, SearchAlgorithm, SortAlgorithm, VertexId,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_sorts(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_steps");

    for &len in &[15usize, 100, 500] {
        let input = demo::sort_array(&mut StdRng::seed_from_u64(len as u64), len);
        group.throughput(Throughput::Elements(len as u64));

        for algorithm in SortAlgorithm::ALL {
            group.bench_with_input(
                BenchmarkId::new(format!("{algorithm:?}"), len),
                &input,
                |b, input| b.iter(|| algorithm.generate(black_box(input))),
            );
        }
    }
    group.finish();
}

fn bench_searches(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_steps");

    for &len in &[15usize, 1_000, 100_000] {
        let input = demo::search_array(&mut StdRng::seed_from_u64(1), len, demo::SEARCH_TARGET);
        group.throughput(Throughput::Elements(len as u64));

        for algorithm in [SearchAlgorithm::Linear, SearchAlgorithm::Binary] {
            group.bench_with_input(
                BenchmarkId::new(format!("{algorithm:?}"), len),
                &input,
                |b, input| b.iter(|| algorithm.generate(black_box(input), demo::SEARCH_TARGET)),
            );
        }
    }
    group.finish();
}

fn bench_traversals(c: &mut Criterion) {
    let graph = Graph::demo();

    c.bench_function("bfs_demo_graph", |b| {
        b.iter(|| breadth_first(black_box(&graph), VertexId(0)))
    });
    c.bench_function("dfs_demo_graph", |b| {
        b.iter(|| depth_first(black_box(&graph), VertexId(0)))
    });
}

criterion_group!(benches, bench_sorts, bench_searches, bench_traversals);
criterion_main!(benches);
