use crate::DistanceGraph;
use petgraph::visit::{EdgeRef, IntoEdgeReferences, IntoNodeIdentifiers};
use std::collections::HashMap;
use std::hash::Hash;

/// Copies any petgraph graph into a [`DistanceGraph`].
///
/// Nodes are numbered in `node_identifiers()` order; the returned vector maps
/// each dense index back to its node id. Parallel edges collapse to the one
/// visited last, matching [`DistanceGraph::add_edge`].
pub fn from_petgraph<G>(graph: G) -> (DistanceGraph, Vec<G::NodeId>)
where
    G: IntoEdgeReferences + IntoNodeIdentifiers,
    G::NodeId: Eq + Hash + Copy,
    G::EdgeWeight: Into<f64> + Copy,
{
    let mut node_map = HashMap::new();
    let mut reverse_node_map = Vec::new();

    for node in graph.node_identifiers() {
        node_map.insert(node, reverse_node_map.len());
        reverse_node_map.push(node);
    }

    let mut our_graph = DistanceGraph::new(reverse_node_map.len());
    for edge in graph.edge_references() {
        let source = node_map[&edge.source()];
        let target = node_map[&edge.target()];
        let weight: f64 = (*edge.weight()).into();
        our_graph.add_edge(source, target, weight);
    }

    (our_graph, reverse_node_map)
}
