use criterion::{Criterion, criterion_group, criterion_main};
use fast_apsp::DistanceGraph;
use petgraph::algo::{dijkstra, floyd_warshall};
use petgraph::graph::DiGraph;
use std::hint::black_box;
use std::path::Path;

#[path = "../tests/graph_loader.rs"]
mod graph_loader;

fn run_fast_apsp(graph: &DistanceGraph) {
    black_box(graph.shortest_distances());
}

fn run_petgraph_dijkstra_all_sources(graph: &DiGraph<(), f64>) {
    for source in graph.node_indices() {
        black_box(dijkstra(graph, source, None, |e| *e.weight()));
    }
}

fn benchmark(c: &mut Criterion) {
    let path = Path::new("tests/test_data/small16");
    let fast_apsp_graph = graph_loader::read_dimacs_graph_for_fast_apsp(path);
    let (petgraph_graph, _) = graph_loader::read_dimacs_graph_for_petgraph(path);

    let mut group = c.benchmark_group("small16 APSP");

    group.bench_function("fast_apsp", |b| {
        b.iter(|| run_fast_apsp(black_box(&fast_apsp_graph)))
    });

    group.bench_function("petgraph_floyd_warshall", |b| {
        b.iter(|| black_box(floyd_warshall(&petgraph_graph, |e| *e.weight())))
    });

    group.bench_function("petgraph_dijkstra_all_sources", |b| {
        b.iter(|| run_petgraph_dijkstra_all_sources(black_box(&petgraph_graph)))
    });

    group.finish();
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
