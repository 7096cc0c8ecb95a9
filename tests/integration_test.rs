
use fast_apsp::{DistanceGraph, GraphError, INFINITY};
use graph_loader::{read_dimacs_graph_for_fast_apsp, reference_graph};
use std::path::Path;

#[test]
fn reference_scenario() {
    let graph = reference_graph();

    // 0 -> 2 -> 3 (10) beats 0 -> 1 -> 3 (11) and 0 -> 1 -> 2 -> 3 (14)
    assert_eq!(graph.shortest_distance(0, 3), 10.0);
    assert_eq!(graph.shortest_distance(0, 1), 5.0);
    // direct edge beats 1 -> 2 -> 3 (9)
    assert_eq!(graph.shortest_distance(1, 3), 6.0);
}

#[test]
fn unreachable_scenario() {
    let mut graph = DistanceGraph::new(3);
    graph.add_edge(0, 1, 4.0);

    assert_eq!(graph.shortest_distance(1, 0), INFINITY);
    assert_eq!(graph.shortest_distance(0, 1), 4.0);
    assert_eq!(graph.shortest_distance(0, 2), INFINITY);
}

#[test]
fn empty_graph_does_not_panic() {
    let graph = DistanceGraph::new(0);
    let dist = graph.shortest_distances();
    assert_eq!(dist.size(), 0);
    assert_eq!(dist.rows().count(), 0);
    assert_eq!(graph.shortest_distance(0, 0), INFINITY);
    assert!(graph.try_shortest_distance(0, 0).is_err());
}

#[test]
fn bounds_rejection_leaves_matrix_unchanged() {
    let mut graph = reference_graph();
    let before = graph.clone();

    // usize::MAX stands in for -1
    graph.add_edge(0usize.wrapping_sub(1), 0, 5.0);
    graph.add_edge(0, graph.vertex_count(), 5.0);

    assert_eq!(graph, before);
    assert!(matches!(
        graph.try_add_edge(0, 4, 5.0),
        Err(GraphError::IndexOutOfRange { vertex: 4, .. })
    ));
    assert_eq!(graph, before);
}

#[test]
fn overwrite_keeps_latest_weight() {
    let mut graph = DistanceGraph::new(2);
    graph.add_edge(0, 1, 3.0);
    graph.add_edge(0, 1, 8.0);
    assert_eq!(graph.weight(0, 1), Some(8.0));
    assert_eq!(graph.shortest_distance(0, 1), 8.0);
}

#[test]
fn snapshot_is_not_affected_by_later_edges() {
    let mut graph = reference_graph();
    let snapshot = graph.shortest_distances();
    graph.add_edge(3, 0, 1.0);

    assert_eq!(snapshot[(3, 0)], INFINITY);
    assert_eq!(graph.shortest_distance(3, 0), 1.0);
    assert_eq!(graph.shortest_distance(3, 1), 6.0);
}

#[test]
fn rendering_matches_driver_output() {
    let graph = reference_graph();
    let adjacency = graph.to_string();
    assert_eq!(adjacency.lines().next(), Some("0.0 5.0 3.0 INF"));

    let text = graph.shortest_distances().to_string();
    assert!(text.contains("0 -> 3: 10.0\n"));
    assert!(text.contains("3 -> 0: unreachable\n"));
    assert_eq!(text.lines().count(), 16);
}

#[test]
fn dimacs_fixture_loads() {
    let graph = read_dimacs_graph_for_fast_apsp(Path::new("tests/test_data/small16"));
    assert_eq!(graph.vertex_count(), 16);
    assert_eq!(graph.edge_count(), 47);

    let dist = graph.shortest_distances();
    // vertex 16 has no outgoing arcs
    for to in 0..15 {
        assert!(!dist.is_reachable(15, to));
    }
}
