use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fast_apsp::DistanceGraph;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

fn create_dense_graph(n: usize, density: f64, seed: u64) -> DistanceGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = DistanceGraph::new(n);

    for from in 0..n {
        for to in 0..n {
            if from != to && rng.random_bool(density) {
                graph.add_edge(from, to, rng.random_range(1.0..20.0));
            }
        }
    }

    graph
}

fn bench_floyd_warshall(c: &mut Criterion) {
    let mut group = c.benchmark_group("All-pairs Floyd-Warshall");

    for &n in &[16, 64, 128, 256] {
        let graph = create_dense_graph(n, 0.3, 42);

        group.bench_with_input(BenchmarkId::new("sequential", n), &graph, |b, graph| {
            b.iter(|| black_box(graph.shortest_distances()))
        });

        #[cfg(feature = "parallel")]
        group.bench_with_input(BenchmarkId::new("parallel", n), &graph, |b, graph| {
            b.iter(|| black_box(fast_apsp::shortest_distances_parallel(graph)))
        });

        #[cfg(feature = "petgraph")]
        {
            use petgraph::algo::floyd_warshall;

            let pg_graph = graph.to_petgraph();
            group.bench_with_input(BenchmarkId::new("petgraph", n), &pg_graph, |b, pg_graph| {
                b.iter(|| black_box(floyd_warshall(pg_graph, |e| *e.weight())))
            });
        }
    }

    group.finish();
}

fn bench_single_pair(c: &mut Criterion) {
    let mut group = c.benchmark_group("Single-pair query");

    // every query pays for the full matrix
    for &n in &[16, 64, 128] {
        let graph = create_dense_graph(n, 0.3, 123);
        group.bench_with_input(BenchmarkId::new("shortest_distance", n), &graph, |b, graph| {
            b.iter(|| black_box(graph.shortest_distance(0, n - 1)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_floyd_warshall, bench_single_pair);
criterion_main!(benches);
